use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::catalog::domain::GameId;
use crate::modules::ranking::domain::value_objects::TierLevel;
use crate::shared::errors::{AppError, AppResult};

/// One ranked game inside a tier list. Owned by its [`TierList`]; only the
/// root creates, re-tiers or removes entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TierListEntry {
    id: Uuid,
    tier_list_id: Uuid,
    game_id: GameId,
    tier: TierLevel,
    position: i32,
    added_at: DateTime<Utc>,
}

impl TierListEntry {
    fn new(tier_list_id: Uuid, game_id: GameId, tier: TierLevel, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tier_list_id,
            game_id,
            tier,
            position,
            added_at: Utc::now(),
        }
    }

    /// Rebuild an entry from storage.
    pub fn restore(
        id: Uuid,
        tier_list_id: Uuid,
        game_id: GameId,
        tier: TierLevel,
        position: i32,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tier_list_id,
            game_id,
            tier,
            position,
            added_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tier_list_id(&self) -> Uuid {
        self.tier_list_id
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn tier(&self) -> TierLevel {
        self.tier
    }

    /// Insertion-order key; gaps are left behind by removals.
    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

/// A mutation recorded by the aggregate and not yet written to storage.
#[derive(Debug, Clone, PartialEq)]
pub enum TierListChange {
    TitleChanged {
        title: String,
    },
    ImageChanged {
        image_url: Option<String>,
    },
    EntryAdded(TierListEntry),
    EntryTierChanged {
        game_id: GameId,
        tier: TierLevel,
    },
    EntryRemoved {
        game_id: GameId,
    },
}

/// Tier list aggregate root
///
/// Holds the list metadata and its entries, at most one per game, in
/// insertion order. Every mutation is also appended to the pending change
/// log, which the repository drains on `save_changes`.
#[derive(Debug, Clone)]
pub struct TierList {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    image_url: Option<String>,
    entries: Vec<TierListEntry>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    pending_changes: Vec<TierListChange>,
}

impl TierList {
    /// Create a new, empty tier list. Title and image follow `update_info`
    /// rules, so a blank title leaves the list untitled.
    pub fn create(owner_id: Uuid, title: Option<String>, image_url: Option<String>) -> Self {
        let now = Utc::now();
        let mut tier_list = Self {
            id: Uuid::new_v4(),
            owner_id,
            title: String::new(),
            image_url: None,
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
            pending_changes: Vec::new(),
        };

        tier_list.update_info(title, image_url);
        // A fresh list is persisted whole by `add`, nothing to replay
        tier_list.pending_changes.clear();
        tier_list
    }

    /// Rebuild a tier list from storage, with no pending changes.
    pub fn restore(
        id: Uuid,
        owner_id: Uuid,
        title: String,
        image_url: Option<String>,
        mut entries: Vec<TierListEntry>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        entries.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.added_at.cmp(&b.added_at))
        });

        Self {
            id,
            owner_id,
            title,
            image_url,
            entries,
            created_at,
            updated_at,
            pending_changes: Vec::new(),
        }
    }

    // ============================================================================================
    // BUSINESS OPERATIONS (Commands)
    // ============================================================================================

    /// Replace the title when `new_title` is non-blank. Any provided image
    /// value replaces the image; an empty string clears it.
    pub fn update_info(&mut self, new_title: Option<String>, new_image_url: Option<String>) {
        if let Some(title) = new_title {
            if !title.trim().is_empty() && title != self.title {
                self.title = title.clone();
                self.pending_changes
                    .push(TierListChange::TitleChanged { title });
                self.touch();
            }
        }

        if let Some(image_url) = new_image_url {
            let image_url = if image_url.is_empty() {
                None
            } else {
                Some(image_url)
            };

            if image_url != self.image_url {
                self.image_url = image_url.clone();
                self.pending_changes
                    .push(TierListChange::ImageChanged { image_url });
                self.touch();
            }
        }
    }

    pub fn add_game(&mut self, game_id: GameId, tier: TierLevel) -> AppResult<&TierListEntry> {
        if self.contains_game(game_id) {
            return Err(AppError::DuplicateEntry(format!(
                "Game {} is already ranked in tier list {}",
                game_id, self.id
            )));
        }

        let position = self
            .entries
            .iter()
            .map(|e| e.position)
            .max()
            .map_or(0, |last| last + 1);

        let entry = TierListEntry::new(self.id, game_id, tier, position);
        self.pending_changes
            .push(TierListChange::EntryAdded(entry.clone()));
        self.entries.push(entry);
        self.touch();

        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    /// Move a ranked game to another tier. The entry keeps its id and position.
    pub fn update_game_tier(&mut self, game_id: GameId, new_tier: TierLevel) -> AppResult<()> {
        let list_id = self.id;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.game_id == game_id)
            .ok_or_else(|| {
                AppError::EntryNotFound(format!(
                    "Game {} is not ranked in tier list {}",
                    game_id, list_id
                ))
            })?;

        if entry.tier != new_tier {
            entry.tier = new_tier;
            self.pending_changes.push(TierListChange::EntryTierChanged {
                game_id,
                tier: new_tier,
            });
            self.touch();
        }

        Ok(())
    }

    /// Remove a ranked game. Absent games are ignored.
    pub fn remove_game(&mut self, game_id: GameId) {
        if let Some(index) = self.entries.iter().position(|e| e.game_id == game_id) {
            self.entries.remove(index);
            self.pending_changes
                .push(TierListChange::EntryRemoved { game_id });
            self.touch();
        }
    }

    /// Replay a change that was committed elsewhere onto this copy. Used by
    /// stores that keep whole aggregates; nothing is recorded as pending.
    pub fn apply_change(&mut self, change: &TierListChange) -> AppResult<()> {
        match change {
            TierListChange::TitleChanged { title } => {
                self.title = title.clone();
            }
            TierListChange::ImageChanged { image_url } => {
                self.image_url = image_url.clone();
            }
            TierListChange::EntryAdded(entry) => {
                if self.contains_game(entry.game_id) {
                    return Err(AppError::DuplicateEntry(format!(
                        "Game {} is already ranked in tier list {}",
                        entry.game_id, self.id
                    )));
                }
                let mut entry = entry.clone();
                entry.tier_list_id = self.id;
                self.entries.push(entry);
            }
            TierListChange::EntryTierChanged { game_id, tier } => {
                let list_id = self.id;
                let entry = self
                    .entries
                    .iter_mut()
                    .find(|e| e.game_id == *game_id)
                    .ok_or_else(|| {
                        AppError::EntryNotFound(format!(
                            "Game {} is not ranked in tier list {}",
                            game_id, list_id
                        ))
                    })?;
                entry.tier = *tier;
            }
            TierListChange::EntryRemoved { game_id } => {
                self.entries.retain(|e| e.game_id != *game_id);
            }
        }

        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // ============================================================================================
    // QUERIES (Read-only)
    // ============================================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn entries(&self) -> &[TierListEntry] {
        &self.entries
    }

    pub fn entry_for(&self, game_id: GameId) -> Option<&TierListEntry> {
        self.entries.iter().find(|e| e.game_id == game_id)
    }

    pub fn contains_game(&self, game_id: GameId) -> bool {
        self.entry_for(game_id).is_some()
    }

    pub fn entries_in_tier(&self, tier: TierLevel) -> impl Iterator<Item = &TierListEntry> {
        self.entries.iter().filter(move |e| e.tier == tier)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ============================================================================================
    // CHANGE TRACKING
    // ============================================================================================

    pub fn pending_changes(&self) -> &[TierListChange] {
        &self.pending_changes
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending_changes.is_empty()
    }

    /// Drain pending changes (after they've been persisted)
    pub fn take_changes(&mut self) -> Vec<TierListChange> {
        std::mem::take(&mut self.pending_changes)
    }
}
