/// Repository trait for tier list persistence
///
/// Implementations own concurrency control: every write is atomic and
/// applies row-level changes, so writers touching different entries of the
/// same list never overwrite each other.
use crate::modules::ranking::domain::aggregates::{TierList, TierListEntry};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TierListRepository: Send + Sync {
    /// Insert a new tier list together with its current entries
    async fn add(&self, tier_list: &TierList) -> AppResult<()>;

    /// Load a detached copy of the aggregate
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<TierList>>;

    async fn get_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<TierList>>;

    /// Delete the tier list and every entry it owns in one operation
    async fn remove(&self, tier_list: &TierList) -> AppResult<()>;

    /// Insert a single entry; `DuplicateEntry` if the game is already ranked
    /// in that list, `NotFound` if the list is gone
    async fn add_entry(&self, entry: &TierListEntry) -> AppResult<()>;

    /// Flush the aggregate's pending changes atomically. They are drained
    /// only when the flush succeeds.
    async fn save_changes(&self, tier_list: &mut TierList) -> AppResult<()>;
}
