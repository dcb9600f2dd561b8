use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::ranking::domain::{
    TierList, TierListChange, TierListEntry, TierListRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Process-local tier list store
///
/// Each write holds the shard lock for its list while it replays changes on
/// a working copy, so the stored aggregate is replaced all at once or not at
/// all.
#[derive(Debug, Default)]
pub struct InMemoryTierListRepository {
    tier_lists: DashMap<Uuid, TierList>,
}

impl InMemoryTierListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries across every stored list.
    pub fn entry_count(&self) -> usize {
        self.tier_lists
            .iter()
            .map(|list| list.entries().len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.tier_lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tier_lists.is_empty()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Tier list with ID {} not found", id))
}

#[async_trait]
impl TierListRepository for InMemoryTierListRepository {
    async fn add(&self, tier_list: &TierList) -> AppResult<()> {
        use dashmap::mapref::entry::Entry;

        match self.tier_lists.entry(tier_list.id()) {
            Entry::Occupied(_) => Err(AppError::DuplicateEntry(format!(
                "Tier list {} already exists",
                tier_list.id()
            ))),
            Entry::Vacant(slot) => {
                let mut stored = tier_list.clone();
                stored.take_changes();
                slot.insert(stored);
                tracing::debug!("Stored tier list {}", tier_list.id());
                Ok(())
            }
        }
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<TierList>> {
        Ok(self.tier_lists.get(&id).map(|list| list.value().clone()))
    }

    async fn get_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<TierList>> {
        let mut lists: Vec<TierList> = self
            .tier_lists
            .iter()
            .filter(|list| list.owner_id() == owner_id)
            .map(|list| list.value().clone())
            .collect();

        lists.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(lists)
    }

    async fn remove(&self, tier_list: &TierList) -> AppResult<()> {
        let (id, removed) = self
            .tier_lists
            .remove(&tier_list.id())
            .ok_or_else(|| not_found(tier_list.id()))?;

        tracing::debug!(
            "Removed tier list {} with {} entries",
            id,
            removed.entries().len()
        );
        Ok(())
    }

    async fn add_entry(&self, entry: &TierListEntry) -> AppResult<()> {
        let mut stored = self
            .tier_lists
            .get_mut(&entry.tier_list_id())
            .ok_or_else(|| not_found(entry.tier_list_id()))?;

        stored.apply_change(&TierListChange::EntryAdded(entry.clone()))
    }

    async fn save_changes(&self, tier_list: &mut TierList) -> AppResult<()> {
        if !tier_list.has_pending_changes() {
            return Ok(());
        }

        {
            let mut stored = self
                .tier_lists
                .get_mut(&tier_list.id())
                .ok_or_else(|| not_found(tier_list.id()))?;

            let mut working = stored.clone();
            for change in tier_list.pending_changes() {
                working.apply_change(change)?;
            }
            *stored = working;
        }

        let flushed = tier_list.take_changes();
        tracing::debug!(
            "Saved {} changes to tier list {}",
            flushed.len(),
            tier_list.id()
        );
        Ok(())
    }
}
