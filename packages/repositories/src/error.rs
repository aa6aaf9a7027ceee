use sea_orm::DbErr;
use services::validation::ValidationError;
use std::fmt;

/// Failure classes for repository operations. Everything is reported
/// synchronously to the caller; nothing here is retried or fatal.
#[derive(Debug)]
pub enum Error {
    /// Field-level constraint or format violation caught before the write.
    Validation(ValidationError),
    /// Uniqueness or referential-integrity violation.
    Integrity(String),
    /// Lookup matched no record.
    NotFound,
    /// Anything surfaced by the database driver.
    Database(DbErr),
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<DbErr> for Error {
    fn from(e: DbErr) -> Self {
        Error::Database(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(e) => write!(f, "validation failed: {}", e),
            Error::Integrity(msg) => write!(f, "integrity violation: {}", msg),
            Error::NotFound => f.write_str("record not found"),
            Error::Database(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, Error::Integrity(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}
