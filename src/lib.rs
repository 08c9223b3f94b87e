//! rowset - immutable result sets over executed SQL statements
//!
//! Takes the outcome of executing a statement (returned records, an
//! affected-row count, a generated insert id) and wraps it in a
//! [`ResultSet`]: clean, table-bound rows with relationship traversal and
//! primary-key-based bulk update/delete delegated to a [`Context`].

pub mod config;
pub mod context;
pub mod cursor;
mod errors;
pub mod memory;
pub mod observability;
pub mod predicate;
pub mod record;
pub mod result;
pub mod row;
pub mod structure;

pub use config::{Config, NeverMatch};
pub use context::{Context, Statement};
pub use cursor::{Cursor, MemoryCursor};
pub use errors::{Error, Result};
pub use memory::MemoryStore;
pub use predicate::{Predicate, RenderedSql};
pub use record::{record, FieldMap};
pub use result::ResultSet;
pub use row::{Row, TableRow};
pub use structure::{PrimaryKey, Relation, StaticStructure, Structure};
