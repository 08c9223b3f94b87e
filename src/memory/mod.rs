//! In-memory backing store
//!
//! A complete [`Context`](crate::context::Context) over tables held in
//! memory. Reads, relationship queries and bulk mutations all come back as
//! result sets, built from a [`MemoryCursor`](crate::cursor::MemoryCursor)
//! exactly as a driver-backed context would.

mod expression;
mod store;

pub use store::MemoryStore;
