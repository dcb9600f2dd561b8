use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::catalog::domain::{GameId, GameRecord, GameRepository};
use crate::modules::catalog::infrastructure::models::GameModel;
use crate::schema::games;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::Database;
use crate::shared::utils::{LogContext, TimedOperation};

/// Diesel-backed reader over the `games` table.
pub struct GameRepositoryImpl {
    db: Arc<Database>,
}

impl GameRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameRepository for GameRepositoryImpl {
    async fn exists(&self, game_id: GameId) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(diesel::dsl::exists(
                games::table.filter(games::id.eq(game_id)),
            ))
            .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn get_by_id(&self, game_id: GameId) -> AppResult<Option<GameRecord>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<GameModel>> {
            let mut conn = db.get_connection()?;
            let m = games::table
                .find(game_id)
                .select(GameModel::as_select())
                .first::<GameModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(GameRecord::from))
    }

    async fn get_many(&self, game_ids: &[GameId]) -> AppResult<Vec<GameRecord>> {
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let ids = game_ids.to_vec();
        let timer = TimedOperation::new("catalog.get_many");

        let models = task::spawn_blocking(move || -> AppResult<Vec<GameModel>> {
            let mut conn = db.get_connection()?;
            let rows = games::table
                .filter(games::id.eq_any(ids))
                .select(GameModel::as_select())
                .load::<GameModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        timer.finish();
        LogContext::db_operation("batch select", "games", models.len());
        Ok(models.into_iter().map(GameRecord::from).collect())
    }
}
