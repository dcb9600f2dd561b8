use crate::modules::status::domain::{PlayStatus, StatusGame};
use crate::schema::status_games;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = status_games)]
pub struct StatusGameModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: i32,
    pub status: PlayStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = status_games)]
pub struct NewStatusGame {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: i32,
    pub status: PlayStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&StatusGame> for NewStatusGame {
    fn from(status: &StatusGame) -> Self {
        NewStatusGame {
            id: status.id(),
            user_id: status.user_id(),
            game_id: status.game_id(),
            status: status.status(),
            created_at: status.created_at(),
            updated_at: status.updated_at(),
        }
    }
}

impl From<StatusGameModel> for StatusGame {
    fn from(model: StatusGameModel) -> Self {
        StatusGame::restore(
            model.id,
            model.user_id,
            model.game_id,
            model.status,
            model.created_at,
            model.updated_at,
        )
    }
}
