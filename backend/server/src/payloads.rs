use catalog::GameRecord;
use serde::Serialize;

#[derive(Serialize)]
pub struct GameView<'a> {
    #[serde(flatten)]
    pub game: &'a GameRecord,
    pub average: f64,
}

impl<'a> From<&'a GameRecord> for GameView<'a> {
    fn from(game: &'a GameRecord) -> Self {
        Self {
            game,
            average: game.ratings.display_average(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesResponse<'a> {
    pub games: Vec<GameView<'a>>,
    pub count: usize,
    /// RFC 3339, absent until the first successful load.
    pub loaded_at: Option<String>,
}

#[derive(Serialize)]
pub struct ReloadResponse {
    pub count: usize,
}
