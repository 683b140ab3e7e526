//! Repository implementations for database access
//!
//! One parameterized statement per operation; rows map to records with
//! explicit column order. "Zero rows affected" is the only domain error
//! detected here; everything else surfaces as a database error.

pub mod pets;

pub use pets::{DbError, PetRepo};
