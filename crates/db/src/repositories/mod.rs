//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Listing queries take the
//! caller's access scope as an explicit argument; by-id lookups do not
//! scope and do not hide soft-deleted rows.

pub mod budget_repo;
pub mod client_repo;
pub mod incident_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod service_repo;
pub mod user_repo;

pub use budget_repo::BudgetRepo;
pub use client_repo::ClientRepo;
pub use incident_repo::IncidentRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use user_repo::UserRepo;
