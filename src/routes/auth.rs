use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth::middleware::AuthUser;
use crate::auth::{jwt, password};
use crate::entities::user;
use crate::error::AppError;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the auth route group: `/auth/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(get_me))
}

// ─────────────────────────────────────────────────────────────────────────────
// DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: String,
    pub university_id: Option<i32>,
    pub is_admin: bool,
    pub language_preference: String,
    pub theme_preference: String,
    pub created_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            user_type: u.user_type,
            university_id: u.university_id,
            is_admin: u.is_admin.unwrap_or(false),
            language_preference: u.language_preference,
            theme_preference: u.theme_preference,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `POST /api/v1/auth/login`
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let invalid = || AppError::Unauthorized("Invalid email or password.".to_string());

    let user_model = state
        .users
        .find_by_email(&body.email)
        .await?
        .ok_or_else(invalid)?;

    // Students invited through course links have no password
    let hash = user_model.password_hash.as_deref().ok_or_else(invalid)?;
    if !password::verify_password(&body.password, hash)? {
        return Err(invalid());
    }

    let token = jwt::generate_access_token(
        &user_model,
        &state.config.jwt_secret,
        state.config.jwt_access_expiration_secs,
    )?;

    tracing::info!(user_id = user_model.id, "User signed in");

    Ok(Json(AuthResponse {
        user: user_model.into(),
        token,
    }))
}

/// `GET /api/v1/auth/me`
async fn get_me(AuthUser(user_model): AuthUser) -> Json<UserResponse> {
    Json(user_model.into())
}
