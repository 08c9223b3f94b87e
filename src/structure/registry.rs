//! In-memory structure registry

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{PrimaryKey, Structure};
use crate::errors::{Error, Result};

/// A named association from one table's rows to another table's rows
///
/// Rows of `target_table` are related when their `foreign_column` equals
/// the source row's `local_column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Relation name as used by callers
    pub name: String,
    /// Table holding the related rows
    pub target_table: String,
    /// Column read from the source rows
    pub local_column: String,
    /// Column matched on the target rows
    pub foreign_column: String,
}

impl Relation {
    /// Create a relation
    pub fn new(
        name: impl Into<String>,
        target_table: impl Into<String>,
        local_column: impl Into<String>,
        foreign_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target_table: target_table.into(),
            local_column: local_column.into(),
            foreign_column: foreign_column.into(),
        }
    }
}

/// Structure backed by explicit registrations
#[derive(Debug, Clone, Default)]
pub struct StaticStructure {
    primary_keys: HashMap<String, PrimaryKey>,
    relations: HashMap<(String, String), Relation>,
}

impl StaticStructure {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the primary key of `table`
    pub fn with_primary_key(mut self, table: impl Into<String>, key: PrimaryKey) -> Self {
        self.primary_keys.insert(table.into(), key);
        self
    }

    /// Registers a relation reachable from `table`
    pub fn with_relation(mut self, table: impl Into<String>, relation: Relation) -> Self {
        self.relations
            .insert((table.into(), relation.name.clone()), relation);
        self
    }

    /// Resolves relation `name` from `table`
    pub fn relation_of(&self, table: &str, name: &str) -> Result<&Relation> {
        self.relations
            .get(&(table.to_string(), name.to_string()))
            .ok_or_else(|| Error::unknown_relation(table, name))
    }
}

impl Structure for StaticStructure {
    fn primary_key_of(&self, table: &str) -> Result<PrimaryKey> {
        self.primary_keys
            .get(table)
            .cloned()
            .ok_or_else(|| Error::UnknownTable(table.to_string()))
    }
}
