//! Domain vocabulary shared by the store and the HTTP layer.
//!
//! Nothing in here performs I/O: error taxonomy, id and timestamp aliases,
//! role names and the status vocabularies with their validation helpers.

pub mod application;
pub mod error;
pub mod hours;
pub mod opportunity;
pub mod roles;
pub mod types;
