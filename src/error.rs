//! Error handling for fixture-forge

use thiserror::Error;

/// Main error type for fixture-forge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureForgeError {
    #[error("Empty lookup table: {table}")]
    EmptyTable { table: String },

    #[error("Unsupported locale: {locale}")]
    UnsupportedLocale { locale: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl FixtureForgeError {
    /// Create an empty-table error
    ///
    /// An empty table is a broken data layer, not a runtime condition
    /// callers are expected to recover from.
    pub fn empty_table(table: impl Into<String>) -> Self {
        Self::EmptyTable {
            table: table.into(),
        }
    }

    /// Create an unsupported-locale error
    pub fn unsupported_locale(locale: impl Into<String>) -> Self {
        Self::UnsupportedLocale {
            locale: locale.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FixtureForgeError>;
