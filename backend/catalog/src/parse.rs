use tracing::debug;

use crate::models::{GameRecord, Ratings};

pub const COLUMN_COUNT: usize = 10;

/// Target type of a positional column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Text,
    Rating,
}

pub const COLUMNS: [Column; COLUMN_COUNT] = [
    Column::Text,   // name
    Column::Text,   // developer
    Column::Text,   // description
    Column::Text,   // age group
    Column::Text,   // category
    Column::Text,   // link
    Column::Rating, // honesty
    Column::Rating, // safety
    Column::Rating, // fairness
    Column::Rating, // age appropriate
];

pub fn parse_catalog(text: &str) -> Vec<GameRecord> {
    text.split('\n')
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| parse_row(index, line))
        .collect()
}

pub fn parse_row(index: usize, line: &str) -> GameRecord {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let cols: Vec<&str> = line.split(',').collect();

    if cols.len() < COLUMN_COUNT {
        debug!(
            "Row {index} has {} of {COLUMN_COUNT} columns, filling defaults",
            cols.len()
        );
    }

    let text = |i: usize| {
        debug_assert_eq!(COLUMNS[i], Column::Text);
        cols.get(i).map(|s| s.to_string()).unwrap_or_default()
    };

    let rating = |i: usize| {
        debug_assert_eq!(COLUMNS[i], Column::Rating);
        cols.get(i).map(|s| parse_rating(s)).unwrap_or(0.0)
    };

    GameRecord {
        id: index.to_string(),
        name: text(0),
        developer: text(1),
        description: text(2),
        age_group: text(3),
        category: text(4),
        link: text(5),
        ratings: Ratings {
            honesty: rating(6),
            safety: rating(7),
            fairness: rating(8),
            age_appropriate: rating(9),
        },
    }
}

/// Anything that is not a finite, non-negative number becomes 0.
pub fn parse_rating(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        // + 0.0 folds -0 into 0
        Ok(value) if value.is_finite() && value >= 0.0 => value + 0.0,
        _ => {
            if !raw.trim().is_empty() {
                debug!("Unusable rating {raw:?}, using 0");
            }
            0.0
        }
    }
}
