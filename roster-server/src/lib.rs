//! roster-server: HTTP API for the user roster
//!
//! Exposes the roster over HTTP (axum) backed by PostgreSQL (sqlx).
//! Layered as: `http` (server, routes, error mapping), `db` (pool,
//! schema setup, repositories), `models` (validated domain newtypes).

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{run_server, ApiError, ServerConfig};
pub use state::AppState;
