//! Repository implementations for database access
//!
//! Each repository borrows the pool and owns the SQL for one resource.

pub mod users;

pub use users::{DbError, User, UserRepo};
