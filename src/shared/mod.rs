// Shared Kernel
// Cross-cutting pieces used by every bounded context

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database pool, migrations)
pub mod utils; // Logging helpers

// Re-exports for convenience
pub use config::{AppConfig, StorageBackend};
pub use errors::{AppError, AppResult, ErrorKind};
pub use infrastructure::Database;
