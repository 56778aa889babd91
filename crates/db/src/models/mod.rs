//! Document structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize + Deserialize` document struct (camelCase on the wire)
//!   implementing [`document::Document`]
//! - A `Deserialize` create DTO, validated with `validator`
//! - Where the entity can be patched, an update DTO of `Option` fields

pub mod application;
pub mod document;
pub mod hours_log;
pub mod opportunity;
pub mod organisation;
pub mod user;
