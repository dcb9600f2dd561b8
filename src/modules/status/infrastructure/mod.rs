pub mod memory;
pub mod models;
pub mod repository;

pub use memory::InMemoryStatusRepository;
pub use repository::StatusRepositoryImpl;
