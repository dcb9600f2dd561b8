/// Diesel-based implementation of StatusRepository
///
/// Writes are upserts on the `(user_id, game_id)` unique index, so racing
/// writers for one pair end up with a single row.
use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::upsert::excluded;
use tokio::task;
use uuid::Uuid;

use crate::modules::catalog::domain::GameId;
use crate::modules::status::domain::{StatusGame, StatusRepository};
use crate::modules::status::infrastructure::models::{NewStatusGame, StatusGameModel};
use crate::schema::status_games;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::{LogContext, TimedOperation};

pub struct StatusRepositoryImpl {
    db: Arc<Database>,
}

impl StatusRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn upsert(&self, status: &StatusGame) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let row = NewStatusGame::from(status);
        let timer = TimedOperation::new("status.upsert");

        task::spawn_blocking(move || -> AppResult<()> {
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            let written = diesel::insert_into(status_games::table)
                .values(&row)
                .on_conflict((status_games::user_id, status_games::game_id))
                .do_update()
                .set((
                    status_games::status.eq(excluded(status_games::status)),
                    status_games::updated_at.eq(excluded(status_games::updated_at)),
                ))
                .execute(conn)?;
            LogContext::db_operation("upsert", "status_games", written);
            Ok(())
        })
        .await??;

        timer.finish();
        Ok(())
    }
}

#[async_trait]
impl StatusRepository for StatusRepositoryImpl {
    async fn add(&self, status: &StatusGame) -> AppResult<()> {
        self.upsert(status).await?;
        tracing::debug!(
            "Stored status {} for user {} game {}",
            status.status(),
            status.user_id(),
            status.game_id()
        );
        Ok(())
    }

    async fn get_by_user_and_game(
        &self,
        user_id: Uuid,
        game_id: GameId,
    ) -> AppResult<Option<StatusGame>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<StatusGameModel>> {
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            Ok(status_games::table
                .filter(status_games::user_id.eq(user_id))
                .filter(status_games::game_id.eq(game_id))
                .select(StatusGameModel::as_select())
                .first::<StatusGameModel>(conn)
                .optional()?)
        })
        .await??;

        Ok(model.map(StatusGame::from))
    }

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Vec<StatusGame>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<StatusGameModel>> {
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            Ok(status_games::table
                .filter(status_games::user_id.eq(user_id))
                .order(status_games::updated_at.desc())
                .select(StatusGameModel::as_select())
                .load::<StatusGameModel>(conn)?)
        })
        .await??;

        LogContext::db_operation("select", "status_games", models.len());
        Ok(models.into_iter().map(StatusGame::from).collect())
    }

    async fn remove(&self, status: &StatusGame) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = status.user_id();
        let game_id = status.game_id();

        let deleted = task::spawn_blocking(move || -> AppResult<usize> {
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            Ok(diesel::delete(
                status_games::table
                    .filter(status_games::user_id.eq(user_id))
                    .filter(status_games::game_id.eq(game_id)),
            )
            .execute(conn)?)
        })
        .await??;

        LogContext::db_operation("delete", "status_games", deleted);
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "No status recorded for user {} and game {}",
                user_id, game_id
            )));
        }
        Ok(())
    }

    async fn save_changes(&self, status: &StatusGame) -> AppResult<()> {
        self.upsert(status).await
    }
}
