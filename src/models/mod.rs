//! Domain models

pub mod pet;
pub mod window;

pub use pet::Pet;
pub use window::{ListParams, ListWindow};
