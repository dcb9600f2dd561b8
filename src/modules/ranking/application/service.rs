use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use super::dto::TierListView;
use crate::modules::catalog::domain::{GameId, GameRecord, GameRepository};
use crate::modules::ranking::domain::{TierLevel, TierList, TierListRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_info};

/// Use cases over tier lists
///
/// Every command loads a fresh copy of the aggregate, mutates it and flushes
/// its pending changes. A failed flush drops the copy, so the stored list is
/// left as it was.
pub struct RankingService {
    tier_list_repo: Arc<dyn TierListRepository>,
    game_repo: Arc<dyn GameRepository>,
}

impl RankingService {
    pub fn new(
        tier_list_repo: Arc<dyn TierListRepository>,
        game_repo: Arc<dyn GameRepository>,
    ) -> Self {
        Self {
            tier_list_repo,
            game_repo,
        }
    }

    // ============================================================================================
    // BUSINESS OPERATIONS (Commands)
    // ============================================================================================

    pub async fn create_tier_list(
        &self,
        owner_id: Uuid,
        title: Option<String>,
        image_url: Option<String>,
    ) -> AppResult<Uuid> {
        let tier_list = TierList::create(owner_id, title, image_url);

        self.tier_list_repo
            .add(&tier_list)
            .await
            .map_err(|e| Self::fail("create_tier_list", e))?;

        log_info!(
            "Created tier list {} for owner {}",
            tier_list.id(),
            owner_id
        );
        Ok(tier_list.id())
    }

    pub async fn add_game_to_tier(
        &self,
        tier_list_id: Uuid,
        game_id: GameId,
        tier: TierLevel,
    ) -> AppResult<()> {
        let result = async {
            let mut tier_list = self.load(tier_list_id).await?;
            self.ensure_game_exists(game_id).await?;

            tier_list.add_game(game_id, tier)?;
            self.tier_list_repo.save_changes(&mut tier_list).await
        }
        .await;

        result.map_err(|e| Self::fail("add_game_to_tier", e))?;
        log_debug!(
            "Added game {} to tier list {} in tier {}",
            game_id,
            tier_list_id,
            tier
        );
        Ok(())
    }

    pub async fn update_tier_list_info(
        &self,
        tier_list_id: Uuid,
        new_title: Option<String>,
        new_image_url: Option<String>,
    ) -> AppResult<()> {
        let result = async {
            let mut tier_list = self.load(tier_list_id).await?;
            tier_list.update_info(new_title, new_image_url);
            self.tier_list_repo.save_changes(&mut tier_list).await
        }
        .await;

        result.map_err(|e| Self::fail("update_tier_list_info", e))
    }

    pub async fn update_game_tier(
        &self,
        tier_list_id: Uuid,
        game_id: GameId,
        new_tier: TierLevel,
    ) -> AppResult<()> {
        let result = async {
            let mut tier_list = self.load(tier_list_id).await?;
            tier_list.update_game_tier(game_id, new_tier)?;
            self.tier_list_repo.save_changes(&mut tier_list).await
        }
        .await;

        result.map_err(|e| Self::fail("update_game_tier", e))
    }

    /// Removing a game that isn't ranked still succeeds.
    pub async fn remove_game_from_tier(
        &self,
        tier_list_id: Uuid,
        game_id: GameId,
    ) -> AppResult<()> {
        let result = async {
            let mut tier_list = self.load(tier_list_id).await?;
            tier_list.remove_game(game_id);
            self.tier_list_repo.save_changes(&mut tier_list).await
        }
        .await;

        result.map_err(|e| Self::fail("remove_game_from_tier", e))
    }

    /// Rank a game, or move it if it is already ranked.
    pub async fn set_game_tier(
        &self,
        tier_list_id: Uuid,
        game_id: GameId,
        tier: TierLevel,
    ) -> AppResult<()> {
        let result = async {
            let mut tier_list = self.load(tier_list_id).await?;
            self.ensure_game_exists(game_id).await?;

            if tier_list.contains_game(game_id) {
                tier_list.update_game_tier(game_id, tier)?;
            } else {
                tier_list.add_game(game_id, tier)?;
            }
            self.tier_list_repo.save_changes(&mut tier_list).await
        }
        .await;

        result.map_err(|e| Self::fail("set_game_tier", e))
    }

    pub async fn delete_tier_list(&self, tier_list_id: Uuid) -> AppResult<()> {
        let result = async {
            let tier_list = self.load(tier_list_id).await?;
            self.tier_list_repo.remove(&tier_list).await?;
            Ok::<_, AppError>(tier_list.entries().len())
        }
        .await;

        let removed = result.map_err(|e| Self::fail("delete_tier_list", e))?;
        log_info!(
            "Deleted tier list {} ({} entries)",
            tier_list_id,
            removed
        );
        Ok(())
    }

    // ============================================================================================
    // QUERIES (Read-only)
    // ============================================================================================

    pub async fn get_tier_list_by_id(&self, tier_list_id: Uuid) -> AppResult<TierListView> {
        let result = async {
            let tier_list = self.load(tier_list_id).await?;
            let games = self.lookup_games(std::slice::from_ref(&tier_list)).await?;
            Ok::<_, AppError>(TierListView::from_aggregate(&tier_list, &games))
        }
        .await;

        result.map_err(|e| Self::fail("get_tier_list_by_id", e))
    }

    /// Tier lists of one owner, newest first.
    pub async fn get_tier_lists_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<TierListView>> {
        let result = async {
            let tier_lists = self.tier_list_repo.get_by_owner(owner_id).await?;
            let games = self.lookup_games(&tier_lists).await?;
            Ok::<_, AppError>(
                tier_lists
                    .iter()
                    .map(|list| TierListView::from_aggregate(list, &games))
                    .collect(),
            )
        }
        .await;

        result.map_err(|e| Self::fail("get_tier_lists_by_owner", e))
    }

    // -----------------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------------

    async fn load(&self, tier_list_id: Uuid) -> AppResult<TierList> {
        self.tier_list_repo
            .get_by_id(tier_list_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Tier list with ID {} not found", tier_list_id))
            })
    }

    async fn ensure_game_exists(&self, game_id: GameId) -> AppResult<()> {
        if self.game_repo.exists(game_id).await? {
            Ok(())
        } else {
            Err(AppError::GameNotFound(format!(
                "Game with ID {} not found in catalog",
                game_id
            )))
        }
    }

    /// One batch catalog lookup for every game ranked in `tier_lists`.
    async fn lookup_games(
        &self,
        tier_lists: &[TierList],
    ) -> AppResult<HashMap<GameId, GameRecord>> {
        let mut ids: Vec<GameId> = tier_lists
            .iter()
            .flat_map(|list| list.entries().iter().map(|e| e.game_id()))
            .collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        ids.sort_unstable();
        ids.dedup();

        let games = self.game_repo.get_many(&ids).await?;
        Ok(games.into_iter().map(|g| (g.id, g)).collect())
    }

    fn fail(operation: &str, err: AppError) -> AppError {
        LogContext::domain_failure(operation, &err);
        err
    }
}
