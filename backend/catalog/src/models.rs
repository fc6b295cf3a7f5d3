use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub developer: String,
    pub description: String,
    pub age_group: String,
    pub category: String,
    pub link: String,
    pub ratings: Ratings,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub honesty: f64,
    pub safety: f64,
    pub fairness: f64,
    pub age_appropriate: f64,
}

impl Ratings {
    pub fn average(&self) -> f64 {
        (self.honesty + self.safety + self.fairness + self.age_appropriate) / 4.0
    }

    /// Average rounded to one decimal place, as shown on game cards.
    pub fn display_average(&self) -> f64 {
        (self.average() * 10.0).round() / 10.0
    }
}
