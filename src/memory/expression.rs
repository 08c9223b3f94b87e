//! Parsing of simple filter expressions
//!
//! The store evaluates predicates in memory, so raw SQL is only understood
//! in its simplest form: `col = ?` terms joined by `AND`. Anything else is
//! kept as a raw predicate, which relation queries reject.

use serde_json::Value;

use crate::predicate::Predicate;

/// Parse `a = ? AND b = ?` into equality predicates bound to `params`
pub(crate) fn parse_conjunction(raw: &str, params: &[Value]) -> Option<Predicate> {
    let mut terms = Vec::new();
    let mut params = params.iter();

    for term in split_and(raw) {
        let (column, placeholder) = term.split_once('=')?;
        let column = column.trim();
        if placeholder.trim() != "?" || !is_identifier(column) {
            return None;
        }
        terms.push(Predicate::eq(column, params.next()?.clone()));
    }

    if terms.is_empty() || params.next().is_some() {
        return None;
    }
    if terms.len() == 1 {
        return terms.pop();
    }
    Some(Predicate::and(terms))
}

fn split_and(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = raw;
    while let Some(at) = find_and(rest) {
        parts.push(&rest[..at]);
        rest = &rest[at + 5..];
    }
    parts.push(rest);
    parts
}

fn find_and(s: &str) -> Option<usize> {
    s.as_bytes()
        .windows(5)
        .position(|w| w.eq_ignore_ascii_case(b" and "))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
