//! Bearer-token verification.
//!
//! - [`jwt`] -- access-token claims, verification and (for tooling and tests)
//!   issuance. Tokens normally come from the external identity provider.

pub mod jwt;
