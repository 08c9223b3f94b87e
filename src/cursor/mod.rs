//! Cursor subsystem
//!
//! A cursor is the driver's handle on an executed statement. Result sets
//! drain it completely during construction and never touch it again.

mod memory;

pub use memory::MemoryCursor;

use crate::errors::Result;
use crate::record::FieldMap;

/// Executed-statement cursor
pub trait Cursor {
    /// Fetch every remaining record, in source order
    fn fetch_all_as_maps(&mut self) -> Result<Vec<FieldMap>>;

    /// Number of rows affected by a data-modifying statement
    fn affected_row_count(&self) -> u64;
}
