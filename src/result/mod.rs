//! Result subsystem
//!
//! A [`ResultSet`] wraps the outcome of one executed statement: the records
//! it returned, the rows it affected and the identifier it generated.
//!
//! # Lifecycle (strict order)
//!
//! 1. Drain the cursor, or take an already materialized record list
//! 2. Create one row per record through the context, in source order
//! 3. Mark every row clean
//! 4. Freeze: rows, count, affected count and insert id never change
//!
//! # Invariants
//!
//! - `count() == rows.len()` always
//! - Construction either completes or fails, no partial result set exists
//! - Bulk update/delete over no identifiable row matches nothing
//! - Derived operations never mutate the result set they start from

mod primary;
mod result_set;

#[cfg(test)]
mod testing;

pub use result_set::ResultSet;
