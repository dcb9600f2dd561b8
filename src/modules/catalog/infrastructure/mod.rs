pub mod memory;
pub mod models;
pub mod repository;

pub use memory::InMemoryGameCatalog;
pub use repository::GameRepositoryImpl;
