use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Fieldless discriminant of [`AppError`], for callers that branch on the
/// failure kind without caring about the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    NotFound,
    GameNotFound,
    DuplicateEntry,
    EntryNotFound,
    PersistenceError,
    InvalidInput,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::GameNotFound(_) => ErrorKind::GameNotFound,
            AppError::DuplicateEntry(_) => ErrorKind::DuplicateEntry,
            AppError::EntryNotFound(_) => ErrorKind::EntryNotFound,
            AppError::PersistenceError(_) => ErrorKind::PersistenceError,
            AppError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Human-readable reason without the kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::GameNotFound(msg)
            | AppError::DuplicateEntry(msg)
            | AppError::EntryNotFound(msg)
            | AppError::PersistenceError(msg)
            | AppError::InvalidInput(msg) => msg,
        }
    }

    /// Wraps anything outside the taxonomy so it still surfaces as a store failure.
    pub fn persistence(context: &str, err: impl std::fmt::Display) -> Self {
        AppError::PersistenceError(format!("{}: {}", context, err))
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                AppError::DuplicateEntry(info.message().to_string())
            }
            _ => AppError::PersistenceError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::PersistenceError(format!("Database pool error: {}", err))
    }
}

impl From<diesel::ConnectionError> for AppError {
    fn from(err: diesel::ConnectionError) -> Self {
        AppError::PersistenceError(format!("Database connection error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::PersistenceError(format!("Blocking database task failed: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(AppError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            AppError::DuplicateEntry("x".into()).kind(),
            ErrorKind::DuplicateEntry
        );
        assert_eq!(
            AppError::PersistenceError("x".into()).kind(),
            ErrorKind::PersistenceError
        );
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(AppError::GameNotFound("Game 7".into())).unwrap();
        assert_eq!(json["type"], "GameNotFound");
        assert_eq!(json["message"], "Game 7");
    }

    #[test]
    fn diesel_not_found_is_a_persistence_error() {
        let err: AppError = diesel::result::Error::NotFound.into();
        assert_eq!(err.kind(), ErrorKind::PersistenceError);
    }

    #[test]
    fn reason_strips_prefix() {
        let err = AppError::EntryNotFound("Game 3 is not ranked".into());
        assert_eq!(err.reason(), "Game 3 is not ranked");
        assert_eq!(err.to_string(), "Entry not found: Game 3 is not ranked");
    }
}
