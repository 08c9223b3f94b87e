//! Materialized result set

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use crate::context::{Context, Statement};
use crate::cursor::Cursor;
use crate::errors::Result;
use crate::observability::Event;
use crate::record::{canonical_key, FieldMap};
use crate::row::Row;
use crate::structure::Structure;

/// Immutable, iterable collection of clean rows of one table
pub struct ResultSet<C: Context> {
    statement: Statement<C>,
    rows: Vec<C::Row>,
    count: usize,
    affected: u64,
    insert_id: Option<Value>,
}

impl<C: Context> ResultSet<C> {
    /// Materializes every record remaining on an executed cursor
    ///
    /// The cursor is fully drained; the caller may close it as soon as this
    /// returns.
    pub fn from_cursor<K>(
        statement: Statement<C>,
        cursor: &mut K,
        insert_id: Option<Value>,
    ) -> Result<Self>
    where
        K: Cursor + ?Sized,
    {
        let records = match cursor.fetch_all_as_maps() {
            Ok(records) => records,
            Err(err) => {
                let reason = err.to_string();
                statement.logger().event(
                    Event::MaterializationFailed,
                    &[("table", statement.table()), ("reason", reason.as_str())],
                );
                return Err(err);
            }
        };
        let affected = cursor.affected_row_count();
        Self::materialize(statement, records, affected, insert_id)
    }

    /// Materializes records that were never executed against a store
    pub fn from_rows(
        statement: Statement<C>,
        records: Vec<FieldMap>,
        insert_id: Option<Value>,
    ) -> Result<Self> {
        Self::materialize(statement, records, 0, insert_id)
    }

    fn materialize(
        statement: Statement<C>,
        records: Vec<FieldMap>,
        affected: u64,
        insert_id: Option<Value>,
    ) -> Result<Self> {
        let logger = statement.logger();
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            let mut row = match statement.context().create_row(statement.table(), record) {
                Ok(row) => row,
                Err(err) => {
                    let reason = err.to_string();
                    logger.event(
                        Event::MaterializationFailed,
                        &[("table", statement.table()), ("reason", reason.as_str())],
                    );
                    return Err(err);
                }
            };
            row.mark_clean();
            rows.push(row);
        }

        let count = rows.len();
        if logger.enabled(Event::ResultMaterialized.severity()) {
            let (rows_field, affected_field) = (count.to_string(), affected.to_string());
            logger.event(
                Event::ResultMaterialized,
                &[
                    ("table", statement.table()),
                    ("rows", rows_field.as_str()),
                    ("affected", affected_field.as_str()),
                ],
            );
        }

        Ok(Self {
            statement,
            rows,
            count,
            affected,
            insert_id,
        })
    }

    /// First row, if any
    pub fn first(&self) -> Option<&C::Row> {
        self.rows.first()
    }

    /// Number of rows
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of rows, same as [`ResultSet::count`]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no row was materialized
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Row at `index`, in source order
    pub fn get(&self, index: usize) -> Option<&C::Row> {
        self.rows.get(index)
    }

    /// Rows in source order
    pub fn iter(&self) -> std::slice::Iter<'_, C::Row> {
        self.rows.iter()
    }

    /// Rows as a slice
    pub fn rows(&self) -> &[C::Row] {
        &self.rows
    }

    /// Rows affected by the statement, 0 for reads and in-memory records
    pub fn affected(&self) -> u64 {
        self.affected
    }

    /// Identifier generated by an insert
    pub fn insert_id(&self) -> Option<&Value> {
        self.insert_id.as_ref()
    }

    /// Table the rows belong to
    pub fn table(&self) -> &str {
        self.statement.table()
    }

    /// Context the rows were read from
    pub fn context(&self) -> &Arc<C> {
        self.statement.context()
    }

    /// Structure used to resolve primary keys
    pub fn structure(&self) -> &Arc<dyn Structure> {
        self.statement.structure()
    }

    /// Statement this result set is bound to
    pub fn statement(&self) -> &Statement<C> {
        &self.statement
    }

    /// Distinct values of `column` across all rows, in first-seen order
    ///
    /// Rows without the column are skipped.
    pub fn get_keys(&self, column: &str) -> Vec<Value> {
        let mut seen = HashSet::with_capacity(self.count);
        let mut keys = Vec::new();

        for row in &self.rows {
            if !row.is_set(column) {
                continue;
            }
            if let Some(value) = row.get(column) {
                if seen.insert(canonical_key(value)) {
                    keys.push(value.clone());
                }
            }
        }
        keys
    }

    /// Query relation `name` of these rows
    ///
    /// `filter` is an extra SQL condition with positional `params`, turned
    /// into a predicate by the context.
    pub fn query(
        &self,
        name: &str,
        filter: Option<&str>,
        params: Vec<Value>,
    ) -> Result<C::Related> {
        let context = self.context();
        let extra = filter.map(|raw| context.build_predicate(raw, params));

        self.statement.logger().event(
            Event::RelationQueried,
            &[("table", self.table()), ("relation", name)],
        );
        context.query_related(self, name, extra)
    }

    /// Update every row of this result set in the backing store
    ///
    /// Rows are identified by primary key, not by the query that loaded
    /// them. The result set itself is left untouched.
    pub fn update(&self, data: FieldMap) -> Result<C::Mutation> {
        let predicate = self.where_primary()?;
        let (rows, columns) = (self.count.to_string(), data.len().to_string());
        self.statement.logger().event(
            Event::BulkUpdate,
            &[
                ("table", self.table()),
                ("rows", rows.as_str()),
                ("columns", columns.as_str()),
            ],
        );
        self.context().update(self.table(), data, predicate)
    }

    /// Delete every row of this result set from the backing store
    pub fn delete(&self) -> Result<C::Mutation> {
        let predicate = self.where_primary()?;
        let rows = self.count.to_string();
        self.statement.logger().event(
            Event::BulkDelete,
            &[("table", self.table()), ("rows", rows.as_str())],
        );
        self.context().delete(self.table(), predicate)
    }

    /// Each row's own JSON projection, in order
    pub fn serialize(&self) -> Vec<Value> {
        self.rows.iter().map(Row::serialize).collect()
    }

    /// The rows as a JSON array
    pub fn to_json(&self) -> Value {
        Value::Array(self.serialize())
    }
}

impl<'a, C: Context> IntoIterator for &'a ResultSet<C> {
    type Item = &'a C::Row;
    type IntoIter = std::slice::Iter<'a, C::Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<C: Context> Serialize for ResultSet<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.count))?;
        for row in &self.rows {
            seq.serialize_element(&Row::serialize(row))?;
        }
        seq.end()
    }
}

impl<C: Context> fmt::Debug for ResultSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultSet")
            .field("table", &self.table())
            .field("count", &self.count)
            .field("affected", &self.affected)
            .field("insert_id", &self.insert_id)
            .finish()
    }
}
