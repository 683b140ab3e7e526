//! Offset/limit window for list queries

use serde::Deserialize;

/// Maximum rows a single list request may ask for
const MAX_ROWS: u32 = 100;

/// Default rows per list request
const DEFAULT_ROWS: u32 = 20;

/// A validated offset/limit window.
#[derive(Debug, Clone, Copy)]
pub struct ListWindow {
    /// Row offset (0-indexed)
    pub start: u32,
    /// Maximum rows to return (clamped to 100)
    pub max: u32,
}

impl ListWindow {
    pub fn new(start: u32, max: u32) -> Self {
        Self {
            start,
            max: max.min(MAX_ROWS),
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        i64::from(self.start)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.max)
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            start: 0,
            max: DEFAULT_ROWS,
        }
    }
}

/// Raw query parameters: `?start=&max=`.
///
/// Negative or non-numeric values are rejected at extraction time (400);
/// missing values fall back to `start=0`, `max=20`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub start: Option<u32>,
    pub max: Option<u32>,
}

impl From<ListParams> for ListWindow {
    fn from(params: ListParams) -> Self {
        Self::new(params.start.unwrap_or(0), params.max.unwrap_or(DEFAULT_ROWS))
    }
}
