/// Shared infrastructure concerns
///
/// Infrastructure used by more than one bounded context.
pub mod database;

// Re-exports for convenience
pub use database::{Database, DbConnection, DbPool};
