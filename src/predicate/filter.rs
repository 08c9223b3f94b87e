//! In-memory evaluation of predicates
//!
//! Exact match only: no type coercion, a missing or null column never
//! matches. Raw SQL cannot be evaluated here and never matches.

use serde_json::Value;

use super::ast::Predicate;
use crate::record::FieldMap;

impl Predicate {
    /// Checks if a record satisfies this predicate
    pub fn matches(&self, record: &FieldMap) -> bool {
        match self {
            Predicate::Eq { column, value } => {
                Self::field(record, column).map_or(false, |actual| actual == value)
            }
            Predicate::In { column, values } => {
                Self::field(record, column).map_or(false, |actual| values.contains(actual))
            }
            Predicate::And(terms) => terms.iter().all(|term| term.matches(record)),
            Predicate::Or(terms) => terms.iter().any(|term| term.matches(record)),
            Predicate::Raw { .. } | Predicate::Never => false,
        }
    }

    fn field<'a>(record: &'a FieldMap, column: &str) -> Option<&'a Value> {
        record.get(column).filter(|value| !value.is_null())
    }
}
