//! The pet record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A pet as stored and served: `{"id": integer, "name": string}`.
///
/// `id` is assigned exactly once, by the database, at insert time.
/// A `Pet` read back from storage always carries a real id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
}
