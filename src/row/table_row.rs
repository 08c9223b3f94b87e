//! Table-bound row with dirty tracking

use serde_json::Value;

use super::Row;
use crate::record::FieldMap;

/// A row of a named table
///
/// Fields assigned through [`TableRow::set`] are pending until the row is
/// marked clean. A freshly created row is dirty: nothing says its values
/// were ever stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    table: String,
    fields: FieldMap,
    modified: Vec<String>,
    clean: bool,
}

impl TableRow {
    /// Creates a row of `table` holding `fields`
    pub fn new(table: impl Into<String>, fields: FieldMap) -> Self {
        let modified = fields.keys().cloned().collect();
        Self {
            table: table.into(),
            fields,
            modified,
            clean: false,
        }
    }

    /// Assigns a field and records it as pending
    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        let column = column.into();
        if !self.modified.contains(&column) {
            self.modified.push(column.clone());
        }
        self.fields.insert(column, value);
        self.clean = false;
    }

    /// Pending columns and their values, in modification order
    pub fn modified(&self) -> FieldMap {
        if self.clean {
            return FieldMap::new();
        }
        self.modified
            .iter()
            .filter_map(|column| {
                self.fields
                    .get(column)
                    .map(|value| (column.clone(), value.clone()))
            })
            .collect()
    }

    /// All fields of the row
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

impl Row for TableRow {
    fn table(&self) -> &str {
        &self.table
    }

    fn is_set(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    fn mark_clean(&mut self) {
        self.modified.clear();
        self.clean = true;
    }

    fn is_clean(&self) -> bool {
        self.clean
    }

    fn serialize(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}
