//! Domain core for the mentorship tracking backend.
//!
//! Holds the closed domain enums, the error type, the store ports the
//! managers talk to, and the two managers themselves: the project lifecycle
//! ([`lifecycle::ProjectLifecycle`]) and the per-project message threads
//! ([`messaging::MessageThreads`]). Nothing in here knows about HTTP or SQL.

pub mod error;
pub mod lifecycle;
pub mod messaging;
pub mod project_ref;
pub mod project_status;
pub mod roles;
pub mod store;
pub mod types;

#[cfg(test)]
mod memory_store;
