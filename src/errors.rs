//! Error types for rowset
//!
//! Error codes:
//! - ROWSET_CURSOR_FAILED
//! - ROWSET_UNKNOWN_TABLE
//! - ROWSET_UNKNOWN_RELATION
//! - ROWSET_CONTEXT_FAILED
//! - ROWSET_SERIALIZATION_FAILED
//!
//! A result set never translates the errors of its collaborators. Whatever a
//! cursor, structure or context returns is handed back to the caller as is.

use thiserror::Error;

/// Result type for rowset operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by rowset and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// The driver cursor failed while fetching records
    #[error("cursor failed: {0}")]
    Cursor(String),

    /// The structure has no primary key registered for a table
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// A relation name could not be resolved from a table
    #[error("unknown relation '{relation}' on table '{table}'")]
    UnknownRelation { table: String, relation: String },

    /// The context failed to create a row or execute a derived statement
    #[error("context failed: {0}")]
    Context(String),

    /// JSON (de)serialization failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a cursor error
    pub fn cursor(reason: impl Into<String>) -> Self {
        Error::Cursor(reason.into())
    }

    /// Create a context error
    pub fn context(reason: impl Into<String>) -> Self {
        Error::Context(reason.into())
    }

    /// Create an unknown relation error
    pub fn unknown_relation(table: impl Into<String>, relation: impl Into<String>) -> Self {
        Error::UnknownRelation {
            table: table.into(),
            relation: relation.into(),
        }
    }

    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::Cursor(_) => "ROWSET_CURSOR_FAILED",
            Error::UnknownTable(_) => "ROWSET_UNKNOWN_TABLE",
            Error::UnknownRelation { .. } => "ROWSET_UNKNOWN_RELATION",
            Error::Context(_) => "ROWSET_CONTEXT_FAILED",
            Error::Serialization(_) => "ROWSET_SERIALIZATION_FAILED",
        }
    }
}
