//! Row subsystem
//!
//! A row is the materialized, table-bound, mutation-trackable wrapper
//! around one record. Result sets only consume the [`Row`] trait;
//! [`TableRow`] is the implementation used by the in-memory store.

mod table_row;

pub use table_row::TableRow;

use serde_json::Value;

/// Field access and state transitions a result set needs from a row
pub trait Row {
    /// Table this row is bound to
    fn table(&self) -> &str;

    /// Returns true if the row carries a value for `column`
    fn is_set(&self, column: &str) -> bool;

    /// Returns the value of `column`, if present
    fn get(&self, column: &str) -> Option<&Value>;

    /// Marks the current field values as persisted
    fn mark_clean(&mut self);

    /// Returns true if no write is pending
    fn is_clean(&self) -> bool;

    /// JSON projection of the row
    fn serialize(&self) -> Value;
}
