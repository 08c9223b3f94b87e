//! Predicate subsystem
//!
//! Predicates are plain values: built by contexts and result sets, rendered
//! to SQL with bound parameters, or evaluated against in-memory records.
//!
//! # Design Principles
//!
//! - A predicate built from an empty key set matches nothing
//! - Conjunctions nested in a disjunction are always parenthesized
//! - Evaluation is exact match only, no type coercion

mod ast;
mod filter;
mod render;

pub use ast::Predicate;
pub use render::RenderedSql;
