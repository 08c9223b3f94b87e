//! Predicate structures

use serde_json::Value;

/// A boolean condition usable to filter rows for read, update or delete
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Equality: column = value
    Eq { column: String, value: Value },
    /// Membership: column IN (values), never empty
    In { column: String, values: Vec<Value> },
    /// All terms must match
    And(Vec<Predicate>),
    /// At least one term must match, never empty
    Or(Vec<Predicate>),
    /// Caller-supplied SQL fragment with positional parameters
    Raw { sql: String, params: Vec<Value> },
    /// Matches no row
    Never,
}

impl Predicate {
    /// Create an equality predicate
    pub fn eq(column: impl Into<String>, value: Value) -> Self {
        Predicate::Eq {
            column: column.into(),
            value,
        }
    }

    /// Create a membership predicate
    ///
    /// An empty value list matches nothing.
    pub fn in_list(column: impl Into<String>, values: Vec<Value>) -> Self {
        if values.is_empty() {
            return Predicate::Never;
        }
        Predicate::In {
            column: column.into(),
            values,
        }
    }

    /// Create a conjunction
    pub fn and(terms: Vec<Predicate>) -> Self {
        Predicate::And(terms)
    }

    /// Create a disjunction
    ///
    /// A disjunction over zero terms matches nothing.
    pub fn or(terms: Vec<Predicate>) -> Self {
        if terms.is_empty() {
            return Predicate::Never;
        }
        Predicate::Or(terms)
    }

    /// Create a raw SQL predicate
    pub fn raw(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Predicate::Raw {
            sql: sql.into(),
            params,
        }
    }

    /// Create a predicate matching no row
    pub fn never() -> Self {
        Predicate::Never
    }

    /// Returns true if this predicate can match no row at all
    pub fn is_never(&self) -> bool {
        matches!(self, Predicate::Never)
    }

    /// Conjoin with an optional extra condition
    pub fn and_maybe(self, extra: Option<Predicate>) -> Self {
        match extra {
            None => self,
            Some(extra) => Predicate::and(vec![self, extra]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_in_list_is_never() {
        assert!(Predicate::in_list("id", vec![]).is_never());
        assert!(!Predicate::in_list("id", vec![json!(1)]).is_never());
    }

    #[test]
    fn test_empty_or_is_never() {
        assert!(Predicate::or(vec![]).is_never());
    }

    #[test]
    fn test_and_maybe() {
        let base = Predicate::eq("id", json!(1));
        assert_eq!(base.clone().and_maybe(None), base);

        let extra = Predicate::raw("active = ?", vec![json!(true)]);
        assert_eq!(
            base.clone().and_maybe(Some(extra.clone())),
            Predicate::And(vec![base, extra])
        );
    }
}
