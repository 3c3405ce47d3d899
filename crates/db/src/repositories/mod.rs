//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod approval_repo;
pub mod mentor_repo;
pub mod message_repo;
pub mod project_repo;
pub mod student_repo;

pub use admin_repo::AdminRepo;
pub use approval_repo::ApprovalRepo;
pub use mentor_repo::MentorRepo;
pub use message_repo::MessageRepo;
pub use project_repo::ProjectRepo;
pub use student_repo::StudentRepo;
