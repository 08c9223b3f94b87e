//! SQL rendering of predicates
//!
//! Values are never inlined: every value becomes a `?` placeholder and is
//! appended to the parameter list in placeholder order.

use serde_json::Value;

use super::ast::Predicate;
use crate::config::NeverMatch;

/// A rendered WHERE condition with its bound parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSql {
    /// Condition text with `?` placeholders
    pub sql: String,
    /// Parameters in placeholder order
    pub params: Vec<Value>,
}

impl Predicate {
    /// Render this predicate to SQL
    pub fn render(&self, never: NeverMatch) -> RenderedSql {
        let mut out = RenderedSql {
            sql: String::new(),
            params: Vec::new(),
        };
        self.render_into(never, &mut out);
        out
    }

    fn render_into(&self, never: NeverMatch, out: &mut RenderedSql) {
        match self {
            Predicate::Eq { column, value } => {
                out.sql.push_str(column);
                out.sql.push_str(" = ?");
                out.params.push(value.clone());
            }
            Predicate::In { column, values } => {
                out.sql.push_str(column);
                out.sql.push_str(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        out.sql.push_str(", ");
                    }
                    out.sql.push('?');
                    out.params.push(value.clone());
                }
                out.sql.push(')');
            }
            Predicate::And(terms) if terms.is_empty() => out.sql.push_str("1 = 1"),
            Predicate::And(terms) => Self::render_joined(terms, " AND ", never, out),
            Predicate::Or(terms) => Self::render_joined(terms, " OR ", never, out),
            Predicate::Raw { sql, params } => {
                out.sql.push_str(sql);
                out.params.extend(params.iter().cloned());
            }
            Predicate::Never => match never {
                NeverMatch::Literal => out.sql.push_str("1 = 0"),
                NeverMatch::Parameterized => {
                    out.sql.push_str("1 = ?");
                    out.params.push(Value::from(0));
                }
            },
        }
    }

    fn render_joined(terms: &[Predicate], separator: &str, never: NeverMatch, out: &mut RenderedSql) {
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                out.sql.push_str(separator);
            }
            if term.needs_parens() {
                out.sql.push('(');
                term.render_into(never, out);
                out.sql.push(')');
            } else {
                term.render_into(never, out);
            }
        }
    }

    fn needs_parens(&self) -> bool {
        matches!(
            self,
            Predicate::And(_) | Predicate::Or(_) | Predicate::Raw { .. }
        )
    }
}
