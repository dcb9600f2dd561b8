pub mod dto;
pub mod service;

pub use dto::{TierListEntryView, TierListView};
pub use service::RankingService;
