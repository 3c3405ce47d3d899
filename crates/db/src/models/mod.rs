//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` create/update DTOs, validated with `validator` where the
//!   handler must reject blank required fields
//! - Joined read views used by the listing endpoints

pub mod account;
pub mod admin;
pub mod approval;
pub mod mentor;
pub mod message;
pub mod project;
pub mod student;
