//! Database layer - connection pool, schema setup, and repositories
//!
//! # Design Principles
//!
//! - Connection pool - no Arc<Mutex<Connection>>
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Parameterized statements only

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
