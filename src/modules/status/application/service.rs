use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use super::dto::StatusView;
use crate::modules::catalog::domain::{GameId, GameRepository};
use crate::modules::status::domain::{PlayStatus, StatusGame, StatusRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_info};

pub struct StatusService {
    status_repo: Arc<dyn StatusRepository>,
    game_repo: Arc<dyn GameRepository>,
}

impl StatusService {
    pub fn new(status_repo: Arc<dyn StatusRepository>, game_repo: Arc<dyn GameRepository>) -> Self {
        Self {
            status_repo,
            game_repo,
        }
    }

    /// Record the user's status for a game, creating the record on first use.
    pub async fn set_status(
        &self,
        user_id: Uuid,
        game_id: GameId,
        status: PlayStatus,
    ) -> AppResult<()> {
        let result = async {
            if !self.game_repo.exists(game_id).await? {
                return Err(AppError::GameNotFound(format!(
                    "Game with ID {} not found in catalog",
                    game_id
                )));
            }

            match self
                .status_repo
                .get_by_user_and_game(user_id, game_id)
                .await?
            {
                Some(mut existing) => {
                    if existing.update_status(status) {
                        self.status_repo.save_changes(&existing).await?;
                    }
                }
                None => {
                    let record = StatusGame::create(user_id, game_id, status);
                    self.status_repo.add(&record).await?;
                    log_info!("User {} started tracking game {}", user_id, game_id);
                }
            }
            Ok(())
        }
        .await;

        result.map_err(|e| Self::fail("set_status", e))?;
        log_debug!("Status of game {} for user {} is {}", game_id, user_id, status);
        Ok(())
    }

    pub async fn remove_status(&self, user_id: Uuid, game_id: GameId) -> AppResult<()> {
        let result = async {
            let record = self
                .status_repo
                .get_by_user_and_game(user_id, game_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "No status recorded for user {} and game {}",
                        user_id, game_id
                    ))
                })?;

            self.status_repo.remove(&record).await
        }
        .await;

        result.map_err(|e| Self::fail("remove_status", e))
    }

    /// Every status the user has recorded, most recently updated first.
    pub async fn get_user_statuses(&self, user_id: Uuid) -> AppResult<Vec<StatusView>> {
        let result = async {
            let records = self.status_repo.get_by_user(user_id).await?;
            if records.is_empty() {
                return Ok(Vec::new());
            }

            let ids: Vec<GameId> = records.iter().map(|r| r.game_id()).collect();
            let games: HashMap<GameId, _> = self
                .game_repo
                .get_many(&ids)
                .await?
                .into_iter()
                .map(|g| (g.id, g))
                .collect();

            Ok::<_, AppError>(
                records
                    .iter()
                    .map(|r| StatusView::from_record(r, games.get(&r.game_id())))
                    .collect(),
            )
        }
        .await;

        result.map_err(|e| Self::fail("get_user_statuses", e))
    }

    pub async fn get_status(
        &self,
        user_id: Uuid,
        game_id: GameId,
    ) -> AppResult<Option<StatusView>> {
        let result = async {
            let Some(record) = self
                .status_repo
                .get_by_user_and_game(user_id, game_id)
                .await?
            else {
                return Ok(None);
            };

            let game = self.game_repo.get_by_id(game_id).await?;
            Ok::<_, AppError>(Some(StatusView::from_record(&record, game.as_ref())))
        }
        .await;

        result.map_err(|e| Self::fail("get_status", e))
    }

    fn fail(operation: &str, err: AppError) -> AppError {
        LogContext::domain_failure(operation, &err);
        err
    }
}
