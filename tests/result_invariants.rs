//! Result Set Invariant Tests
//!
//! Tests for the guarantees a result set gives its callers:
//! - count always equals the number of materialized rows
//! - rows keep source order and are clean after construction
//! - an empty result is a normal value, never an error
//! - bulk update/delete identify rows by primary key only
//! - bulk update/delete over nothing match nothing
//! - derived operations never mutate the result set

use std::cell::RefCell;
use std::sync::Arc;

use rowset::{
    record, Config, Context, FieldMap, MemoryCursor, NeverMatch, Predicate, PrimaryKey, Result,
    ResultSet, Row, Statement, StaticStructure, TableRow,
};
use serde_json::{json, Value};

// =============================================================================
// Helper Context
// =============================================================================

/// Context that renders every derived statement to SQL instead of running it
#[derive(Default)]
struct SqlContext {
    issued: RefCell<Vec<String>>,
}

impl Context for SqlContext {
    type Row = TableRow;
    type Related = String;
    type Mutation = (String, Vec<Value>);

    fn create_row(&self, table: &str, fields: FieldMap) -> Result<TableRow> {
        Ok(TableRow::new(table, fields))
    }

    fn query_related(
        &self,
        result: &ResultSet<Self>,
        name: &str,
        _filter: Option<Predicate>,
    ) -> Result<String> {
        let rendered = result
            .statement()
            .render(&Predicate::in_list("parent_id", result.get_keys("id")));
        Ok(format!("SELECT * FROM {} WHERE {}", name, rendered.sql))
    }

    fn update(&self, table: &str, data: FieldMap, predicate: Predicate) -> Result<Self::Mutation> {
        let rendered = predicate.render(NeverMatch::Parameterized);
        let set: Vec<String> = data.keys().map(|column| format!("{} = ?", column)).collect();
        let sql = format!("UPDATE {} SET {} WHERE {}", table, set.join(", "), rendered.sql);
        self.issued.borrow_mut().push(sql.clone());

        let mut params: Vec<Value> = data.values().cloned().collect();
        params.extend(rendered.params);
        Ok((sql, params))
    }

    fn delete(&self, table: &str, predicate: Predicate) -> Result<Self::Mutation> {
        let rendered = predicate.render(NeverMatch::Literal);
        let sql = format!("DELETE FROM {} WHERE {}", table, rendered.sql);
        self.issued.borrow_mut().push(sql.clone());
        Ok((sql, rendered.params))
    }
}

fn statement(table: &str) -> Statement<SqlContext> {
    let structure = StaticStructure::new()
        .with_primary_key("users", PrimaryKey::scalar("id"))
        .with_primary_key("grants", PrimaryKey::composite(["user_id", "role_id"]));
    Statement::new(table, Arc::new(SqlContext::default()), Arc::new(structure))
}

fn users(ids: &[i64]) -> ResultSet<SqlContext> {
    let records = ids.iter().map(|id| record([("id", json!(id))])).collect();
    ResultSet::from_rows(statement("users"), records, None).unwrap()
}

// =============================================================================
// Construction Tests
// =============================================================================

/// Count and order follow the source records for any length.
#[test]
fn test_count_and_order_follow_source() {
    for n in 0..20i64 {
        let ids: Vec<i64> = (0..n).rev().collect();
        let result = users(&ids);

        assert_eq!(result.count(), ids.len());
        let seen: Vec<Value> = result.iter().map(|row| row.get("id").unwrap().clone()).collect();
        let expected: Vec<Value> = ids.iter().map(|id| json!(id)).collect();
        assert_eq!(seen, expected);
    }
}

/// Every materialized row is clean.
#[test]
fn test_rows_clean_after_construction() {
    let mut cursor = MemoryCursor::new(vec![
        record([("id", json!(1)), ("name", json!("a"))]),
        record([("id", json!(2)), ("name", json!("b"))]),
    ]);
    let result = ResultSet::from_cursor(statement("users"), &mut cursor, None).unwrap();
    for row in &result {
        assert!(row.is_clean());
        assert!(row.modified().is_empty());
    }
}

/// Affected count and fetched rows are independent.
#[test]
fn test_affected_independent_of_rows() {
    let mut cursor = MemoryCursor::affected(7);
    let result = ResultSet::from_cursor(statement("users"), &mut cursor, Some(json!(99))).unwrap();

    assert_eq!(result.count(), 0);
    assert_eq!(result.affected(), 7);
    assert_eq!(result.insert_id(), Some(&json!(99)));
    assert!(result.first().is_none());
}

/// In-memory records never report affected rows.
#[test]
fn test_from_rows_affected_is_zero() {
    assert_eq!(users(&[1, 2, 3]).affected(), 0);
    assert!(users(&[1]).insert_id().is_none());
}

// =============================================================================
// Primary Key Predicate Tests
// =============================================================================

/// Scalar keys collapse to a deduplicated IN list.
#[test]
fn test_update_scalar_key_sql() {
    let result = users(&[5, 7, 5]);
    let (sql, params) = result.update(record([("active", json!(false))])).unwrap();

    assert_eq!(sql, "UPDATE users SET active = ? WHERE id IN (?, ?)");
    assert_eq!(params, vec![json!(false), json!(5), json!(7)]);
}

/// Composite keys become a parenthesized disjunction of conjunctions.
#[test]
fn test_delete_composite_key_sql() {
    let records = vec![
        record([("user_id", json!(1)), ("role_id", json!(2))]),
        record([("user_id", json!(3)), ("role_id", json!(4))]),
    ];
    let result = ResultSet::from_rows(statement("grants"), records, None).unwrap();
    let (sql, params) = result.delete().unwrap();

    assert_eq!(
        sql,
        "DELETE FROM grants WHERE (user_id = ? AND role_id = ?) OR (user_id = ? AND role_id = ?)"
    );
    assert_eq!(params, vec![json!(1), json!(2), json!(3), json!(4)]);
}

/// An empty result never produces an unconstrained mutation.
#[test]
fn test_empty_result_never_unconstrained() {
    let result = users(&[]);

    let (update_sql, update_params) = result.update(record([("active", json!(false))])).unwrap();
    assert_eq!(update_sql, "UPDATE users SET active = ? WHERE 1 = ?");
    assert_eq!(update_params, vec![json!(false), json!(0)]);

    let (delete_sql, _) = result.delete().unwrap();
    assert_eq!(delete_sql, "DELETE FROM users WHERE 1 = 0");

    let grants = ResultSet::from_rows(statement("grants"), vec![], None).unwrap();
    assert_eq!(grants.delete().unwrap().0, "DELETE FROM grants WHERE 1 = 0");
}

/// Re-invoking a derived operation re-issues it.
#[test]
fn test_derived_operations_not_memoized() {
    let result = users(&[1]);
    result.delete().unwrap();
    result.delete().unwrap();
    assert_eq!(result.context().issued.borrow().len(), 2);
}

/// Derived operations leave the result set as it was.
#[test]
fn test_mutations_do_not_touch_result() {
    let result = users(&[1, 2]);
    let before = result.serialize();

    result.update(record([("id", json!(100))])).unwrap();
    result.delete().unwrap();

    assert_eq!(result.count(), 2);
    assert_eq!(result.serialize(), before);
}

// =============================================================================
// Relationship And Serialization Tests
// =============================================================================

/// Relationship queries receive the result set as key supplier.
#[test]
fn test_query_passes_self() {
    assert_eq!(
        users(&[4, 4, 2]).query("children", None, vec![]).unwrap(),
        "SELECT * FROM children WHERE parent_id IN (?, ?)"
    );
}

/// Relationship queries over nothing render the configured never-match.
#[test]
fn test_query_empty_uses_config() {
    let stmt = statement("users");
    let result = ResultSet::from_rows(stmt, vec![], None).unwrap();
    assert_eq!(
        result.query("children", None, vec![]).unwrap(),
        "SELECT * FROM children WHERE 1 = 0"
    );

    let stmt = statement("users")
        .with_config(Config::default().with_never_match(NeverMatch::Parameterized));
    let result = ResultSet::from_rows(stmt, vec![], None).unwrap();
    assert_eq!(
        result.query("children", None, vec![]).unwrap(),
        "SELECT * FROM children WHERE 1 = ?"
    );
}

/// Serialization is the ordered list of row projections.
#[test]
fn test_serialize_matches_rows() {
    let result = users(&[3, 1, 2]);
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"[{"id":3},{"id":1},{"id":2}]"#);
    assert_eq!(result.serialize().len(), result.count());
}
