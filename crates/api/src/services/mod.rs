//! Business operations over the document store.
//!
//! Services are free async functions taking `&dyn DocumentStore` first, like
//! the repositories they build on. They own defaulting (new ids, initial
//! statuses, ownership from the caller) and input validation. Expected
//! absence is returned as `Ok(None)`; handlers turn it into a 404.

pub mod application;
pub mod hours_log;
pub mod opportunity;
pub mod seed;
