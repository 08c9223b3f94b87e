//! Primary-key predicates
//!
//! Bulk update and delete identify "the rows of this result set" by primary
//! key, never by re-running the query that loaded them: the original filter
//! may no longer match after intervening writes.

use std::collections::HashSet;

use serde_json::Value;

use super::ResultSet;
use crate::context::Context;
use crate::errors::Result;
use crate::observability::Event;
use crate::predicate::Predicate;
use crate::record::canonical_key;
use crate::row::Row;
use crate::structure::PrimaryKey;

impl<C: Context> ResultSet<C> {
    /// Predicate matching exactly the rows of this result set
    ///
    /// - scalar key: `key IN (distinct values)`
    /// - composite key: `(k1 = ? AND k2 = ?) OR ...`, one term per distinct
    ///   key tuple
    ///
    /// When no row can be identified the predicate matches nothing.
    pub fn where_primary(&self) -> Result<Predicate> {
        let key = self.structure().primary_key_of(self.table())?;

        let predicate = match &key {
            PrimaryKey::Scalar(column) => Predicate::in_list(column.as_str(), self.get_keys(column)),
            PrimaryKey::Composite(columns) => self.composite_predicate(columns),
        };

        let logger = self.statement().logger();
        if predicate.is_never() {
            logger.event(Event::EmptyKeySet, &[("table", self.table())]);
        } else {
            let columns = key.columns().join(",");
            logger.event(
                Event::PrimaryPredicateBuilt,
                &[("table", self.table()), ("key", columns.as_str())],
            );
        }
        Ok(predicate)
    }

    fn composite_predicate(&self, columns: &[String]) -> Predicate {
        // An empty conjunction is always true
        if columns.is_empty() {
            return Predicate::never();
        }

        let context = self.context();
        let mut seen = HashSet::with_capacity(self.count());
        let mut terms = Vec::with_capacity(self.count());

        for row in self.iter() {
            // A row lacking any key column cannot be identified
            let Some(values) = columns
                .iter()
                .map(|column| row.get(column))
                .collect::<Option<Vec<&Value>>>()
            else {
                continue;
            };

            let tuple: Vec<Value> = values.iter().map(|v| (*v).clone()).collect();
            if !seen.insert(canonical_key(&Value::Array(tuple))) {
                continue;
            }

            let clauses = columns
                .iter()
                .zip(values)
                .map(|(column, value)| context.equality_predicate(column, value))
                .collect();
            terms.push(Predicate::and(clauses));
        }

        Predicate::or(terms)
    }
}
