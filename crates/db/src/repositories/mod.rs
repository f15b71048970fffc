//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept an executor (`&PgPool` or an open transaction) as the first
//! argument.

pub mod entity_repo;
pub mod user_repo;

pub use entity_repo::EntityRepo;
pub use user_repo::UserRepo;
