//! Observable events emitted while materializing and deriving from result sets

use std::fmt;

use super::logger::Severity;

/// Observable events in rowset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Materialization
    /// All records of a statement were turned into clean rows
    ResultMaterialized,
    /// A cursor or row factory failed during construction
    MaterializationFailed,

    // Primary-key predicates
    /// A primary-key predicate was built for a bulk mutation
    PrimaryPredicateBuilt,
    /// No key could be collected, the predicate matches nothing
    EmptyKeySet,

    // Derived operations
    /// A relationship query was delegated to the context
    RelationQueried,
    /// A bulk update was delegated to the context
    BulkUpdate,
    /// A bulk delete was delegated to the context
    BulkDelete,
}

impl Event {
    /// Returns the event name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ResultMaterialized => "RESULT_MATERIALIZED",
            Event::MaterializationFailed => "MATERIALIZATION_FAILED",
            Event::PrimaryPredicateBuilt => "PRIMARY_PREDICATE_BUILT",
            Event::EmptyKeySet => "EMPTY_KEY_SET",
            Event::RelationQueried => "RELATION_QUERIED",
            Event::BulkUpdate => "BULK_UPDATE",
            Event::BulkDelete => "BULK_DELETE",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ResultMaterialized | Event::PrimaryPredicateBuilt | Event::RelationQueried => {
                Severity::Trace
            }
            Event::BulkUpdate | Event::BulkDelete => Severity::Info,
            // A bulk mutation over nothing is legal but usually a caller bug
            Event::EmptyKeySet => Severity::Warn,
            Event::MaterializationFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::ResultMaterialized.as_str(), "RESULT_MATERIALIZED");
        assert_eq!(Event::EmptyKeySet.to_string(), "EMPTY_KEY_SET");
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::MaterializationFailed.severity(), Severity::Error);
        assert_eq!(Event::EmptyKeySet.severity(), Severity::Warn);
        assert!(Event::ResultMaterialized.severity() < Event::BulkDelete.severity());
    }
}
