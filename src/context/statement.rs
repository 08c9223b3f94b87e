//! Statement binding

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::observability::Logger;
use crate::predicate::{Predicate, RenderedSql};
use crate::structure::Structure;

/// The table and collaborators a result set is bound to
pub struct Statement<C> {
    table: String,
    context: Arc<C>,
    structure: Arc<dyn Structure>,
    config: Config,
}

impl<C> Statement<C> {
    /// Bind `table` of `context`
    pub fn new(table: impl Into<String>, context: Arc<C>, structure: Arc<dyn Structure>) -> Self {
        Self {
            table: table.into(),
            context,
            structure,
            config: Config::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Same collaborators, another table
    pub fn for_table(&self, table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..self.clone()
        }
    }

    /// Bound table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Context of the backing store
    pub fn context(&self) -> &Arc<C> {
        &self.context
    }

    /// Primary-key structure of the backing store
    pub fn structure(&self) -> &Arc<dyn Structure> {
        &self.structure
    }

    /// Configuration carried by result sets of this statement
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render `predicate` with the configured never-match style
    pub fn render(&self, predicate: &Predicate) -> RenderedSql {
        predicate.render(self.config.never_match)
    }

    pub(crate) fn logger(&self) -> Logger {
        self.config.logger()
    }
}

impl<C> Clone for Statement<C> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            context: Arc::clone(&self.context),
            structure: Arc::clone(&self.structure),
            config: self.config.clone(),
        }
    }
}

impl<C> fmt::Debug for Statement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("table", &self.table)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
