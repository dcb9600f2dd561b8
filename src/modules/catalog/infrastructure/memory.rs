use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::catalog::domain::{GameId, GameRecord, GameRepository};
use crate::shared::errors::AppResult;

/// Process-local catalog, seeded by the caller.
#[derive(Debug, Default)]
pub struct InMemoryGameCatalog {
    games: DashMap<GameId, GameRecord>,
}

impl InMemoryGameCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(games: impl IntoIterator<Item = GameRecord>) -> Self {
        let catalog = Self::new();
        for game in games {
            catalog.insert(game);
        }
        catalog
    }

    pub fn insert(&self, game: GameRecord) {
        self.games.insert(game.id, game);
    }

    /// Drops a game from the catalog, as a delisting would.
    pub fn remove(&self, game_id: GameId) -> Option<GameRecord> {
        self.games.remove(&game_id).map(|(_, game)| game)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameCatalog {
    async fn exists(&self, game_id: GameId) -> AppResult<bool> {
        Ok(self.games.contains_key(&game_id))
    }

    async fn get_by_id(&self, game_id: GameId) -> AppResult<Option<GameRecord>> {
        Ok(self.games.get(&game_id).map(|g| g.value().clone()))
    }

    async fn get_many(&self, game_ids: &[GameId]) -> AppResult<Vec<GameRecord>> {
        Ok(game_ids
            .iter()
            .filter_map(|id| self.games.get(id).map(|g| g.value().clone()))
            .collect())
    }
}
