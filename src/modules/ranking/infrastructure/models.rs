use crate::modules::ranking::domain::{TierLevel, TierList, TierListEntry};
use crate::schema::{tier_list_entries, tier_lists};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// ============= TIER LIST MODELS =============

// For reading from database - with associations support
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = tier_lists)]
pub struct TierListModel {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new tier lists
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tier_lists)]
pub struct NewTierList {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&TierList> for NewTierList {
    fn from(tier_list: &TierList) -> Self {
        NewTierList {
            id: tier_list.id(),
            owner_id: tier_list.owner_id(),
            title: tier_list.title().to_string(),
            image_url: tier_list.image_url().map(str::to_string),
            created_at: tier_list.created_at(),
            updated_at: tier_list.updated_at(),
        }
    }
}

// ============= TIER LIST ENTRIES =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(TierListModel, foreign_key = tier_list_id))]
#[diesel(table_name = tier_list_entries)]
pub struct TierListEntryModel {
    pub id: Uuid,
    pub tier_list_id: Uuid,
    pub game_id: i32,
    pub tier: TierLevel,
    pub position: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tier_list_entries)]
pub struct NewTierListEntry {
    pub id: Uuid,
    pub tier_list_id: Uuid,
    pub game_id: i32,
    pub tier: TierLevel,
    pub position: i32,
    pub added_at: DateTime<Utc>,
}

impl From<&TierListEntry> for NewTierListEntry {
    fn from(entry: &TierListEntry) -> Self {
        NewTierListEntry {
            id: entry.id(),
            tier_list_id: entry.tier_list_id(),
            game_id: entry.game_id(),
            tier: entry.tier(),
            position: entry.position(),
            added_at: entry.added_at(),
        }
    }
}

impl From<TierListEntryModel> for TierListEntry {
    fn from(model: TierListEntryModel) -> Self {
        TierListEntry::restore(
            model.id,
            model.tier_list_id,
            model.game_id,
            model.tier,
            model.position,
            model.added_at,
        )
    }
}

/// Assemble the aggregate from its root row and entry rows.
pub fn to_aggregate(model: TierListModel, entries: Vec<TierListEntryModel>) -> TierList {
    TierList::restore(
        model.id,
        model.owner_id,
        model.title,
        model.image_url,
        entries.into_iter().map(TierListEntry::from).collect(),
        model.created_at,
        model.updated_at,
    )
}
