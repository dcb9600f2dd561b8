/// Game catalog (read side)
///
/// Canonical game records are ingested elsewhere; ranking and status tracking
/// only look them up by id.
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{GameId, GameRecord, GameRepository};
pub use infrastructure::{GameRepositoryImpl, InMemoryGameCatalog};
