/// Ranking bounded context: user-owned tier lists of catalog games
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{RankingService, TierListEntryView, TierListView};
pub use domain::{TierLevel, TierList, TierListChange, TierListEntry, TierListRepository};

// Re-export infrastructure components
pub use infrastructure::{InMemoryTierListRepository, TierListRepositoryImpl};
