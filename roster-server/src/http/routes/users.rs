//! User endpoints
//!
//! POST /users - register a user (201, 409 on duplicate email)
//! GET /users - list every user, ascending id

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{DbError, User, UserRepo};
use crate::http::error::ApiError;
use crate::models::{Email, UserName};
use crate::state::AppState;

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// User response
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

/// User list response
#[derive(Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// POST /users - validate, insert, return the created record
async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let name = UserName::new(&req.name)?;
    let email = Email::new(&req.email)?;

    let user = UserRepo::new(state.pool())
        .create(name, email)
        .await
        .map_err(|e| match e {
            DbError::Conflict { .. } => ApiError::Conflict {
                message: "A user with this email already exists",
            },
            e => ApiError::Database {
                context: "Failed to create user",
                source: e,
            },
        })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /users - full listing, no pagination
async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>, ApiError> {
    let users = UserRepo::new(state.pool())
        .list()
        .await
        .map_err(|e| ApiError::Database {
            context: "Failed to retrieve users",
            source: e,
        })?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(create_user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    /// App over a lazy pool: validation failures must reject the
    /// request before any connection is ever dialed.
    fn lazy_app() -> Router {
        let pool = sqlx::PgPool::connect_lazy("postgres://127.0.0.1:1/unreachable")
            .expect("lazy pool");
        router().with_state(AppState::new(pool))
    }

    fn post_users(body: &str) -> Request<Body> {
        Request::post("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_rejects_malformed_email_before_database() {
        let res = lazy_app()
            .oneshot(post_users(r#"{"name":"Ada","email":"not-an-email"}"#))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn create_rejects_empty_name_before_database() {
        let res = lazy_app()
            .oneshot(post_users(r#"{"name":"","email":"ada@example.com"}"#))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_missing_email_before_database() {
        // Missing fields never reach the handler; the JSON extractor
        // rejects them
        let res = lazy_app()
            .oneshot(post_users(r#"{"name":"Ada"}"#))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_list_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migration failed");

        let email = format!("roundtrip-{}@example.com", std::process::id());
        sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(&email)
            .execute(&pool)
            .await
            .expect("cleanup failed");

        let app = router().with_state(AppState::new(pool));

        let res = app
            .clone()
            .oneshot(post_users(&format!(
                r#"{{"name":"Ada","email":"{}"}}"#,
                email
            )))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let created: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(created["email"], email.as_str());

        // Duplicate attempt conflicts
        let res = app
            .clone()
            .oneshot(post_users(&format!(
                r#"{{"name":"Ada Again","email":"{}"}}"#,
                email
            )))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CONFLICT);

        // Listing contains the created user exactly once
        let res = app
            .oneshot(Request::get("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let matches = body["users"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|u| u["email"] == email.as_str())
            .count();
        assert_eq!(matches, 1);
    }
}
