//! Schema migration command
//!
//! Initializes the users table without starting the server. Useful
//! for provisioning a database before first deploy.

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Initialize the database schema and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to initialize database schema")?;

    tracing::info!("Schema migration complete");
    Ok(())
}
