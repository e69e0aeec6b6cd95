//! Pure domain logic for the Sirius business-management backend.
//!
//! No database or HTTP dependencies: everything here is plain functions
//! and types consumed by the `sirius-db` and `sirius-api` crates.

pub mod access;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod numbering;
pub mod types;
pub mod validate;
