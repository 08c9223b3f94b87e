//! Context subsystem
//!
//! The context is the backing store a result set was read from: it creates
//! rows, builds predicates and executes the statements a result set derives
//! (relationship queries, bulk update, bulk delete). A [`Statement`] binds a
//! context to one table together with the structure and configuration a
//! result set needs, so nothing is looked up through ambient state.

mod statement;

pub use statement::Statement;

use serde_json::Value;

use crate::errors::Result;
use crate::predicate::Predicate;
use crate::record::FieldMap;
use crate::result::ResultSet;
use crate::row::Row;

/// Collaborator capabilities a result set delegates to
pub trait Context: Sized {
    /// Row type produced for every record
    type Row: Row;
    /// Handle returned by relationship queries
    type Related;
    /// Handle returned by bulk update and delete
    type Mutation;

    /// Create a row bound to `table` holding `fields`
    fn create_row(&self, table: &str, fields: FieldMap) -> Result<Self::Row>;

    /// Build `column = value`
    fn equality_predicate(&self, column: &str, value: &Value) -> Predicate {
        Predicate::eq(column, value.clone())
    }

    /// Build a predicate from a raw SQL expression
    fn build_predicate(&self, raw: &str, params: Vec<Value>) -> Predicate {
        Predicate::raw(raw, params)
    }

    /// Resolve relation `name` from the rows of `result`
    fn query_related(
        &self,
        result: &ResultSet<Self>,
        name: &str,
        filter: Option<Predicate>,
    ) -> Result<Self::Related>;

    /// Update the rows of `table` matching `predicate` with `data`
    fn update(&self, table: &str, data: FieldMap, predicate: Predicate) -> Result<Self::Mutation>;

    /// Delete the rows of `table` matching `predicate`
    fn delete(&self, table: &str, predicate: Predicate) -> Result<Self::Mutation>;
}
