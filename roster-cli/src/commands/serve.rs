//! HTTP server command
//!
//! Runs the roster HTTP server with all routes.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use roster_server::db::create_pool_with_options;
use roster_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0:3000)
    #[arg(long, short = 'b', default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Maximum database connections in the pool
    #[arg(long, default_value_t = 10)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting roster server on {}", args.bind);

    // Create database pool
    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    // Configure server
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
