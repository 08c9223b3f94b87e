//! Primary key shapes

use serde::{Deserialize, Serialize};

/// The column or ordered columns that uniquely identify a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryKey {
    /// Single-column key
    Scalar(String),
    /// Multi-column key, in declaration order
    Composite(Vec<String>),
}

impl PrimaryKey {
    /// Create a single-column key
    pub fn scalar(column: impl Into<String>) -> Self {
        PrimaryKey::Scalar(column.into())
    }

    /// Create a multi-column key
    pub fn composite<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        PrimaryKey::Composite(columns.into_iter().map(Into::into).collect())
    }

    /// Key columns in order
    pub fn columns(&self) -> Vec<&str> {
        match self {
            PrimaryKey::Scalar(column) => vec![column.as_str()],
            PrimaryKey::Composite(columns) => columns.iter().map(String::as_str).collect(),
        }
    }
}
