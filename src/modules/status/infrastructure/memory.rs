use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::catalog::domain::GameId;
use crate::modules::status::domain::{StatusGame, StatusRepository};
use crate::shared::errors::{AppError, AppResult};

/// Process-local status store keyed by `(user, game)`.
#[derive(Debug, Default)]
pub struct InMemoryStatusRepository {
    records: DashMap<(Uuid, GameId), StatusGame>,
}

impl InMemoryStatusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert, or overwrite the status of the existing record for the pair.
    fn upsert(&self, status: &StatusGame) {
        self.records
            .entry((status.user_id(), status.game_id()))
            .and_modify(|existing| {
                existing.update_status(status.status());
            })
            .or_insert_with(|| status.clone());
    }
}

#[async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn add(&self, status: &StatusGame) -> AppResult<()> {
        self.upsert(status);
        Ok(())
    }

    async fn get_by_user_and_game(
        &self,
        user_id: Uuid,
        game_id: GameId,
    ) -> AppResult<Option<StatusGame>> {
        Ok(self
            .records
            .get(&(user_id, game_id))
            .map(|r| r.value().clone()))
    }

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Vec<StatusGame>> {
        let mut records: Vec<StatusGame> = self
            .records
            .iter()
            .filter(|r| r.user_id() == user_id)
            .map(|r| r.value().clone())
            .collect();

        records.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        Ok(records)
    }

    async fn remove(&self, status: &StatusGame) -> AppResult<()> {
        self.records
            .remove(&(status.user_id(), status.game_id()))
            .map(|_| ())
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No status recorded for user {} and game {}",
                    status.user_id(),
                    status.game_id()
                ))
            })
    }

    async fn save_changes(&self, status: &StatusGame) -> AppResult<()> {
        self.upsert(status);
        tracing::debug!(
            "Saved status {} for user {} game {}",
            status.status(),
            status.user_id(),
            status.game_id()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::status::domain::PlayStatus;

    #[test]
    fn racing_adds_for_one_pair_keep_a_single_record() {
        let repo = InMemoryStatusRepository::new();
        let user = Uuid::new_v4();

        tokio_test::block_on(repo.add(&StatusGame::create(user, 3, PlayStatus::Backlog))).unwrap();
        tokio_test::block_on(repo.add(&StatusGame::create(user, 3, PlayStatus::Playing))).unwrap();

        assert_eq!(repo.len(), 1);
        let stored = tokio_test::block_on(repo.get_by_user_and_game(user, 3))
            .unwrap()
            .unwrap();
        assert_eq!(stored.status(), PlayStatus::Playing);
    }

    #[test]
    fn remove_missing_pair_is_not_found() {
        let repo = InMemoryStatusRepository::new();
        let record = StatusGame::create(Uuid::new_v4(), 1, PlayStatus::Dropped);

        let err = tokio_test::block_on(repo.remove(&record)).unwrap_err();
        assert_eq!(err.kind(), crate::shared::errors::ErrorKind::NotFound);
        assert!(repo.is_empty());
    }
}
