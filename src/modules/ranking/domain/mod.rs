pub mod aggregates;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use aggregates::{TierList, TierListChange, TierListEntry};
pub use repository::TierListRepository;
pub use value_objects::TierLevel;
