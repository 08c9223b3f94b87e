//! Vector-backed cursor

use super::Cursor;
use crate::errors::{Error, Result};
use crate::record::FieldMap;

/// Cursor over records already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    records: Vec<FieldMap>,
    affected: u64,
    failure: Option<String>,
}

impl MemoryCursor {
    /// Cursor yielding `records`
    pub fn new(records: Vec<FieldMap>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Cursor of a statement that returned no records but touched `affected` rows
    pub fn affected(affected: u64) -> Self {
        Self {
            affected,
            ..Self::default()
        }
    }

    /// Set the affected-row count reported by the driver
    pub fn with_affected(mut self, affected: u64) -> Self {
        self.affected = affected;
        self
    }

    /// Cursor whose fetch fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Records not fetched yet
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl Cursor for MemoryCursor {
    fn fetch_all_as_maps(&mut self) -> Result<Vec<FieldMap>> {
        if let Some(reason) = &self.failure {
            return Err(Error::cursor(reason.clone()));
        }
        Ok(std::mem::take(&mut self.records))
    }

    fn affected_row_count(&self) -> u64 {
        self.affected
    }
}
