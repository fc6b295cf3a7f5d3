use catalog::GameRecord;

const NAME_WIDTH: usize = 32;
const DEVELOPER_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 14;

pub fn format_line(game: &GameRecord) -> String {
    format!(
        "{:>3}  {:<NAME_WIDTH$}  {:<DEVELOPER_WIDTH$}  {:<CATEGORY_WIDTH$}  {:.1}",
        game.id,
        truncate(&game.name, NAME_WIDTH),
        truncate(&game.developer, DEVELOPER_WIDTH),
        truncate(&game.category, CATEGORY_WIDTH),
        game.ratings.display_average(),
    )
}

/// Cuts on char boundaries, marking cut text with `~`.
pub fn truncate(input: &str, width: usize) -> String {
    if input.chars().count() <= width {
        return input.to_string();
    }

    let mut s: String = input.chars().take(width.saturating_sub(1)).collect();
    s.push('~');
    s
}
