//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the create/edit payloads
//!
//! Enum-valued columns are stored as TEXT and decoded through
//! `#[sqlx(try_from = "String")]` so the enums themselves stay in
//! `sirius-core` without a sqlx dependency.

pub mod budget;
pub mod client;
pub mod incident;
pub mod project;
pub mod service;
pub mod user;
