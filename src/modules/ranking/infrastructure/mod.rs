pub mod memory;
pub mod models;
pub mod repository;

pub use memory::InMemoryTierListRepository;
pub use repository::TierListRepositoryImpl;
