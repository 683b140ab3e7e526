//! petstore: a minimal HTTP CRUD service over a single `pets` table.
//!
//! Thin glue between axum and sqlx: route registration, parameter
//! extraction, one parameterized SQL statement per request, JSON in and
//! out. The only process-wide state is the connection pool, injected
//! into handlers through [`http::AppState`].

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig};
