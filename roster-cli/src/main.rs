//! roster CLI - user roster service management
//!
//! Entry point for the `roster` command-line tool:
//! - `serve`: run the HTTP API over PostgreSQL
//! - `migrate`: initialize the database schema and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    author,
    version,
    about = "User roster HTTP service backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),

    /// Initialize the database schema and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DATABASE_URL and friends from a local .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
    }
}
