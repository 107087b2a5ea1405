//! Database schema setup for the users table

use sqlx::PgPool;

/// Run schema migrations. Idempotent.
///
/// Called from `run_server` before the listener binds, so a broken
/// database surfaces at startup rather than on the first write.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running roster migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) UNIQUE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema initialized");
    Ok(())
}
