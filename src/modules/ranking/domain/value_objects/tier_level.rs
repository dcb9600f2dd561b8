use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Rank level of a game inside a tier list. Declaration order is rank order:
/// `S` sorts first and is the best tier.
#[derive(
    diesel_derive_enum::DbEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::TierLevel"]
pub enum TierLevel {
    S, // Best tier
    A,
    B,
    C,
    D, // Worst tier
}

impl TierLevel {
    pub const ALL: [TierLevel; 5] = [
        TierLevel::S,
        TierLevel::A,
        TierLevel::B,
        TierLevel::C,
        TierLevel::D,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TierLevel::S => "S",
            TierLevel::A => "A",
            TierLevel::B => "B",
            TierLevel::C => "C",
            TierLevel::D => "D",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            TierLevel::S => 1,
            TierLevel::A => 2,
            TierLevel::B => 3,
            TierLevel::C => 4,
            TierLevel::D => 5,
        }
    }

    pub fn is_better_than(&self, other: &TierLevel) -> bool {
        self < other
    }
}

impl fmt::Display for TierLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TierLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "S" => Ok(TierLevel::S),
            "A" => Ok(TierLevel::A),
            "B" => Ok(TierLevel::B),
            "C" => Ok(TierLevel::C),
            "D" => Ok(TierLevel::D),
            _ => Err(AppError::InvalidInput(format!("Invalid tier: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_totally_ordered_best_first() {
        let mut shuffled = vec![
            TierLevel::C,
            TierLevel::S,
            TierLevel::D,
            TierLevel::A,
            TierLevel::B,
        ];
        shuffled.sort();
        assert_eq!(shuffled, TierLevel::ALL.to_vec());
        assert!(TierLevel::S.is_better_than(&TierLevel::A));
        assert!(!TierLevel::D.is_better_than(&TierLevel::C));
    }

    #[test]
    fn parses_labels_case_insensitively() {
        for tier in TierLevel::ALL {
            assert_eq!(tier.label().parse::<TierLevel>().unwrap(), tier);
            assert_eq!(tier.label().to_lowercase().parse::<TierLevel>().unwrap(), tier);
        }
        assert!("Z".parse::<TierLevel>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for tier in TierLevel::ALL {
            assert_eq!(tier.to_string(), tier.label());
            assert_eq!(tier.to_string().parse::<TierLevel>().unwrap(), tier);
        }
    }

    #[test]
    fn level_follows_rank_order() {
        let levels: Vec<u8> = TierLevel::ALL.iter().map(|t| t.level()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }
}
