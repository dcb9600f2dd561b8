use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog key of a game.
pub type GameId = i32;

/// Canonical game record as stored by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    pub platform: String,
    pub cover_image: Option<String>,
    pub rating: Option<f32>,
    pub released: Option<NaiveDate>,
}

impl GameRecord {
    pub fn new(id: GameId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            platform: String::new(),
            cover_image: None,
            rating: None,
            released: None,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_cover(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }
}
