//! Table storage and the context implementation

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use serde_json::Value;

use super::expression::parse_conjunction;
use crate::config::Config;
use crate::context::{Context, Statement};
use crate::cursor::MemoryCursor;
use crate::errors::{Error, Result};
use crate::predicate::Predicate;
use crate::record::FieldMap;
use crate::result::ResultSet;
use crate::row::TableRow;
use crate::structure::{PrimaryKey, StaticStructure, Structure};

type Tables = HashMap<String, Vec<FieldMap>>;

/// Tables of records held in memory
#[derive(Debug)]
pub struct MemoryStore {
    this: Weak<MemoryStore>,
    structure: Arc<StaticStructure>,
    tables: RwLock<Tables>,
    config: Config,
}

impl MemoryStore {
    /// Creates an empty store described by `structure`
    pub fn new(structure: StaticStructure) -> Arc<Self> {
        Self::with_config(structure, Config::default())
    }

    /// Creates an empty store whose statements carry `config`
    pub fn with_config(structure: StaticStructure, config: Config) -> Arc<Self> {
        let structure = Arc::new(structure);
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            structure,
            tables: RwLock::new(HashMap::new()),
            config,
        })
    }

    /// Binds a statement to `table` of this store
    pub fn statement(&self, table: &str) -> Result<Statement<Self>> {
        let this = self
            .this
            .upgrade()
            .ok_or_else(|| Error::context("memory store is being dropped"))?;
        let structure: Arc<dyn Structure> = self.structure.clone();
        Ok(Statement::new(table, this, structure).with_config(self.config.clone()))
    }

    /// Inserts a record
    ///
    /// The returned result set holds no rows, reports one affected row and
    /// carries the record's key as insert id when the table has a
    /// single-column key.
    pub fn insert(&self, table: &str, record: FieldMap) -> Result<ResultSet<Self>> {
        let insert_id = match self.structure.primary_key_of(table) {
            Ok(PrimaryKey::Scalar(column)) => record.get(&column).cloned(),
            _ => None,
        };
        self.write()?
            .entry(table.to_string())
            .or_default()
            .push(record);

        let statement = self.statement(table)?;
        ResultSet::from_cursor(statement, &mut MemoryCursor::affected(1), insert_id)
    }

    /// Records of `table` matching `predicate`, in insertion order
    pub fn select(&self, table: &str, predicate: &Predicate) -> Result<Vec<FieldMap>> {
        Ok(self
            .read()?
            .get(table)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| predicate.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Runs a read against `table`
    pub fn query(&self, table: &str, predicate: &Predicate) -> Result<ResultSet<Self>> {
        let records = self.select(table, predicate)?;
        let statement = self.statement(table)?;
        ResultSet::from_cursor(statement, &mut MemoryCursor::new(records), None)
    }

    /// Every record of `table`
    pub fn all(&self, table: &str) -> Result<ResultSet<Self>> {
        self.query(table, &Predicate::and(Vec::new()))
    }

    /// Number of records stored in `table`
    pub fn len(&self, table: &str) -> Result<usize> {
        Ok(self.read()?.get(table).map_or(0, Vec::len))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| Error::context("table lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| Error::context("table lock poisoned"))
    }
}

impl Context for MemoryStore {
    type Row = TableRow;
    type Related = ResultSet<MemoryStore>;
    type Mutation = ResultSet<MemoryStore>;

    fn create_row(&self, table: &str, fields: FieldMap) -> Result<TableRow> {
        Ok(TableRow::new(table, fields))
    }

    fn build_predicate(&self, raw: &str, params: Vec<Value>) -> Predicate {
        parse_conjunction(raw, &params).unwrap_or_else(|| Predicate::raw(raw, params))
    }

    fn query_related(
        &self,
        result: &ResultSet<Self>,
        name: &str,
        filter: Option<Predicate>,
    ) -> Result<ResultSet<Self>> {
        if let Some(Predicate::Raw { sql, .. }) = &filter {
            return Err(Error::context(format!("unsupported filter: {}", sql)));
        }

        let relation = self.structure.relation_of(result.table(), name)?;
        let keys = result.get_keys(&relation.local_column);
        let predicate =
            Predicate::in_list(relation.foreign_column.as_str(), keys).and_maybe(filter);

        let records = self.select(&relation.target_table, &predicate)?;
        let statement = result.statement().for_table(relation.target_table.as_str());
        ResultSet::from_cursor(statement, &mut MemoryCursor::new(records), None)
    }

    fn update(&self, table: &str, data: FieldMap, predicate: Predicate) -> Result<ResultSet<Self>> {
        let mut affected = 0;
        if let Some(records) = self.write()?.get_mut(table) {
            for record in records.iter_mut().filter(|record| predicate.matches(record)) {
                for (column, value) in &data {
                    record.insert(column.clone(), value.clone());
                }
                affected += 1;
            }
        }

        let statement = self.statement(table)?;
        ResultSet::from_cursor(statement, &mut MemoryCursor::affected(affected), None)
    }

    fn delete(&self, table: &str, predicate: Predicate) -> Result<ResultSet<Self>> {
        let mut affected = 0;
        if let Some(records) = self.write()?.get_mut(table) {
            let before = records.len();
            records.retain(|record| !predicate.matches(record));
            affected = (before - records.len()) as u64;
        }

        let statement = self.statement(table)?;
        ResultSet::from_cursor(statement, &mut MemoryCursor::affected(affected), None)
    }
}
