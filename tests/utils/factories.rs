/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use tierboard_lib::modules::catalog::{GameId, GameRecord};

pub fn random_game_id() -> GameId {
    rand::random::<u16>() as GameId + 1000
}

pub struct GameFactory {
    id: GameId,
    title: String,
    platform: String,
    cover_image: Option<String>,
}

impl Default for GameFactory {
    fn default() -> Self {
        Self {
            id: random_game_id(),
            title: "Test Game".to_string(),
            platform: "PC".to_string(),
            cover_image: None,
        }
    }
}

impl GameFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover_image = Some(cover.into());
        self
    }

    pub fn build(self) -> GameRecord {
        let mut game = GameRecord::new(self.id, self.title).with_platform(self.platform);
        game.cover_image = self.cover_image;
        game
    }
}

/// Games with ids `1..=count`, titled after their id.
pub fn numbered_games(count: GameId) -> Vec<GameRecord> {
    (1..=count)
        .map(|id| {
            GameFactory::new()
                .with_id(id)
                .with_title(format!("Game {}", id))
                .build()
        })
        .collect()
}
