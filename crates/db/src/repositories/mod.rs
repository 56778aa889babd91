//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&dyn DocumentStore` as the first argument. The shared,
//! entity-agnostic operations live in [`base`].

pub mod application_repo;
pub mod base;
pub mod hours_log_repo;
pub mod opportunity_repo;
pub mod organisation_repo;
pub mod user_repo;

pub use application_repo::ApplicationRepo;
pub use hours_log_repo::HoursLogRepo;
pub use opportunity_repo::OpportunityRepo;
pub use organisation_repo::OrganisationRepo;
pub use user_repo::UserRepo;
