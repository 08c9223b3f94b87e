//! Structure subsystem
//!
//! Reports the primary key of a table, and for the in-memory store, the
//! relations between tables.

mod primary_key;
mod registry;

pub use primary_key::PrimaryKey;
pub use registry::{Relation, StaticStructure};

use crate::errors::Result;

/// Schema introspection a result set needs
pub trait Structure: Send + Sync {
    /// Primary key definition of `table`
    fn primary_key_of(&self, table: &str) -> Result<PrimaryKey>;
}
