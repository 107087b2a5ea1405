//! User repository
//!
//! Single-statement operations. Email uniqueness is the column's
//! UNIQUE constraint, surfaced as `DbError::Conflict` - there is no
//! check-then-insert.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{Email, UserName};

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} with this {field} already exists")]
    Conflict {
        resource: &'static str,
        field: &'static str,
    },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user, returning the stored record.
    ///
    /// A unique violation on the email column becomes
    /// `DbError::Conflict`; every other failure passes through.
    pub async fn create(&self, name: UserName, email: Email) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(name.as_str())
        .bind(email.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DbError::Conflict {
                resource: "user",
                field: "email",
            },
            _ => DbError::Sqlx(e),
        })?;

        Ok(user)
    }

    /// List all users ordered by ascending id.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as("SELECT id, name, email, created_at FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }
}
