use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::catalog::domain::GameId;
use crate::modules::status::domain::value_objects::PlayStatus;

/// The current play status of one user for one game. There is at most one
/// record per `(user_id, game_id)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusGame {
    id: Uuid,
    user_id: Uuid,
    game_id: GameId,
    status: PlayStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StatusGame {
    pub fn create(user_id: Uuid, game_id: GameId, status: PlayStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            game_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a record from storage.
    pub fn restore(
        id: Uuid,
        user_id: Uuid,
        game_id: GameId,
        status: PlayStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            game_id,
            status,
            created_at,
            updated_at,
        }
    }

    /// Returns whether the status actually changed.
    pub fn update_status(&mut self, status: PlayStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.updated_at = Utc::now();
        true
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn status(&self) -> PlayStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_status_overwrites_in_place() {
        let mut record = StatusGame::create(Uuid::new_v4(), 42, PlayStatus::Playing);
        let id = record.id();

        assert!(record.update_status(PlayStatus::Completed));
        assert!(!record.update_status(PlayStatus::Completed));

        assert_eq!(record.id(), id);
        assert_eq!(record.status(), PlayStatus::Completed);
        assert!(record.updated_at() >= record.created_at());
    }
}
