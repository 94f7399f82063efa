//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into `DomainError::Unexpected`.

use chrono::NaiveDate;
use thiserror::Error;

/// User-correctable input problems. Messages quote the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid or missing name.")]
    EmptyName,

    #[error(
        "The name '{name}' looks invalid: it has {count} parts but must have between {min} and {max}."
    )]
    PartCount {
        name: String,
        count: usize,
        min: usize,
        max: usize,
    },

    #[error(
        "The name part '{part}' has an invalid length after cleaning ({length}); allowed {min} to {max} letters."
    )]
    PartLength {
        part: String,
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Birth date {date} is out of range ({min} to {max}).")]
    BirthDateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Anything validation did not anticipate. Detail is for logs, not end users.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
