use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::{GameId, GameRecord};
use crate::modules::status::domain::{PlayStatus, StatusGame};

/// Read model of a status record, joined with catalog data when available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: GameId,
    pub status: PlayStatus,
    pub game_title: Option<String>,
    pub cover_image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl StatusView {
    pub fn from_record(record: &StatusGame, game: Option<&GameRecord>) -> Self {
        Self {
            id: record.id(),
            user_id: record.user_id(),
            game_id: record.game_id(),
            status: record.status(),
            game_title: game.map(|g| g.title.clone()),
            cover_image: game.and_then(|g| g.cover_image.clone()),
            updated_at: record.updated_at(),
        }
    }
}
