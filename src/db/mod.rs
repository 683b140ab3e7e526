//! Database layer: connection pool, one-shot schema bootstrap, and the
//! pet repository.
//!
//! Every statement checks a connection out of the pool for its own
//! duration and returns it on every exit path. No explicit transactions;
//! each statement is autocommit.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::{DbError, PetRepo};
