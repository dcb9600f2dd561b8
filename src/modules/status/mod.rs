/// Per-user play status of catalog games
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{StatusService, StatusView};
pub use domain::{PlayStatus, StatusGame, StatusRepository};
pub use infrastructure::{InMemoryStatusRepository, StatusRepositoryImpl};
