use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Where a user stands with a game.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::PlayStatus"]
pub enum PlayStatus {
    Backlog,
    Playing,
    Completed,
    OnHold,
    Dropped,
}

impl PlayStatus {
    pub const ALL: [PlayStatus; 5] = [
        PlayStatus::Backlog,
        PlayStatus::Playing,
        PlayStatus::Completed,
        PlayStatus::OnHold,
        PlayStatus::Dropped,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PlayStatus::Backlog => "Backlog",
            PlayStatus::Playing => "Playing",
            PlayStatus::Completed => "Completed",
            PlayStatus::OnHold => "On Hold",
            PlayStatus::Dropped => "Dropped",
        }
    }

    /// Statuses that mean the user is done with the game, one way or another.
    pub fn is_finished(&self) -> bool {
        matches!(self, PlayStatus::Completed | PlayStatus::Dropped)
    }
}

impl fmt::Display for PlayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PlayStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "backlog" => Ok(PlayStatus::Backlog),
            "playing" => Ok(PlayStatus::Playing),
            "completed" => Ok(PlayStatus::Completed),
            "onhold" => Ok(PlayStatus::OnHold),
            "dropped" => Ok(PlayStatus::Dropped),
            _ => Err(AppError::InvalidInput(format!("Unknown play status: '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("on_hold".parse::<PlayStatus>().unwrap(), PlayStatus::OnHold);
        assert_eq!("On Hold".parse::<PlayStatus>().unwrap(), PlayStatus::OnHold);
        assert_eq!(" PLAYING ".parse::<PlayStatus>().unwrap(), PlayStatus::Playing);
        assert!("finished".parse::<PlayStatus>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for status in PlayStatus::ALL {
            assert_eq!(status.to_string().parse::<PlayStatus>().unwrap(), status);
        }
    }
}
