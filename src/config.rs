//! Result set configuration
//!
//! Configuration is a plain value bound to a statement. It can be built in
//! code or loaded from JSON; every field has a default.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::observability::{Logger, Severity};

/// How a predicate that must match no row is rendered to SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeverMatch {
    /// `1 = 0`
    Literal,
    /// `1 = ?` with a bound `0`, keeps the statement text stable for caching
    Parameterized,
}

/// Result set configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum severity written by the logger (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,

    /// Rendering of never-matching predicates (default: literal)
    #[serde(default = "default_never_match")]
    pub never_match: NeverMatch,
}

fn default_log_level() -> Severity {
    Severity::Warn
}

fn default_never_match() -> NeverMatch {
    NeverMatch::Literal
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            never_match: default_never_match(),
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the log threshold
    pub fn with_log_level(mut self, level: Severity) -> Self {
        self.log_level = level;
        self
    }

    /// Set the never-match rendering
    pub fn with_never_match(mut self, never_match: NeverMatch) -> Self {
        self.never_match = never_match;
        self
    }

    /// Build the logger described by this configuration
    pub fn logger(&self) -> Logger {
        Logger::new(self.log_level)
    }
}
