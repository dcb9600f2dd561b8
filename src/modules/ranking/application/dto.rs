use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::{GameId, GameRecord};
use crate::modules::ranking::domain::{TierLevel, TierList, TierListEntry};

/// Read model of one ranked game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierListEntryView {
    pub id: Uuid,
    pub game_id: GameId,
    pub tier: TierLevel,
    pub position: i32,
    /// Catalog title; `None` when the game has since left the catalog
    pub game_title: Option<String>,
    pub cover_image: Option<String>,
}

/// Read model of a tier list with its entries in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierListView {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub entries: Vec<TierListEntryView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TierListView {
    pub fn from_aggregate(tier_list: &TierList, games: &HashMap<GameId, GameRecord>) -> Self {
        Self {
            id: tier_list.id(),
            owner_id: tier_list.owner_id(),
            title: tier_list.title().to_string(),
            image_url: tier_list.image_url().map(str::to_string),
            entries: tier_list
                .entries()
                .iter()
                .map(|entry| TierListEntryView::from_entry(entry, games.get(&entry.game_id())))
                .collect(),
            created_at: tier_list.created_at(),
            updated_at: tier_list.updated_at(),
        }
    }

    /// Entries of one tier, keeping list order.
    pub fn tier(&self, tier: TierLevel) -> impl Iterator<Item = &TierListEntryView> {
        self.entries.iter().filter(move |e| e.tier == tier)
    }
}

impl TierListEntryView {
    fn from_entry(entry: &TierListEntry, game: Option<&GameRecord>) -> Self {
        Self {
            id: entry.id(),
            game_id: entry.game_id(),
            tier: entry.tier(),
            position: entry.position(),
            game_title: game.map(|g| g.title.clone()),
            cover_image: game.and_then(|g| g.cover_image.clone()),
        }
    }
}
