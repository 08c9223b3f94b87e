//! Recording context for result set unit tests

use std::cell::Cell;
use std::sync::Arc;

use serde_json::Value;

use super::ResultSet;
use crate::context::{Context, Statement};
use crate::errors::{Error, Result};
use crate::predicate::Predicate;
use crate::record::FieldMap;
use crate::row::TableRow;
use crate::structure::{PrimaryKey, StaticStructure};

/// What a relationship query received
#[derive(Debug)]
pub struct RelatedCall {
    pub relation: String,
    pub keys: Vec<Value>,
    pub filter: Option<Predicate>,
}

/// What a bulk mutation received
#[derive(Debug)]
pub struct MutationCall {
    pub table: String,
    pub data: Option<FieldMap>,
    pub predicate: Predicate,
}

/// Context that creates plain rows and echoes back derived calls
#[derive(Debug, Default)]
pub struct RecordingContext {
    created: Cell<usize>,
    fail_after: Cell<Option<usize>>,
}

impl RecordingContext {
    pub fn rows_created(&self) -> usize {
        self.created.get()
    }

    /// Fail every row creation once `n` rows were created
    pub fn fail_after(&self, n: usize) {
        self.fail_after.set(Some(n));
    }
}

impl Context for RecordingContext {
    type Row = TableRow;
    type Related = RelatedCall;
    type Mutation = MutationCall;

    fn create_row(&self, table: &str, fields: FieldMap) -> Result<TableRow> {
        if self.fail_after.get().map_or(false, |n| self.created.get() >= n) {
            return Err(Error::context("row factory unavailable"));
        }
        self.created.set(self.created.get() + 1);
        Ok(TableRow::new(table, fields))
    }

    fn query_related(
        &self,
        result: &ResultSet<Self>,
        name: &str,
        filter: Option<Predicate>,
    ) -> Result<RelatedCall> {
        Ok(RelatedCall {
            relation: name.to_string(),
            keys: result.get_keys("id"),
            filter,
        })
    }

    fn update(&self, table: &str, data: FieldMap, predicate: Predicate) -> Result<MutationCall> {
        Ok(MutationCall {
            table: table.to_string(),
            data: Some(data),
            predicate,
        })
    }

    fn delete(&self, table: &str, predicate: Predicate) -> Result<MutationCall> {
        Ok(MutationCall {
            table: table.to_string(),
            data: None,
            predicate,
        })
    }
}

/// Statement over `table` with `users(id)` and `memberships(a, b)` keys
pub fn statement(table: &str) -> Statement<RecordingContext> {
    let structure = StaticStructure::new()
        .with_primary_key("users", PrimaryKey::scalar("id"))
        .with_primary_key("memberships", PrimaryKey::composite(["a", "b"]));
    Statement::new(table, Arc::new(RecordingContext::default()), Arc::new(structure))
}
