pub mod entities;
pub mod repository;

pub use entities::{GameId, GameRecord};
pub use repository::GameRepository;
