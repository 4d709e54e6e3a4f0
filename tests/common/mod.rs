#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::Set;
use tower::ServiceExt;

use classmind_api::auth::{jwt, password};
use classmind_api::config::{Config, Environment};
use classmind_api::entities::{user, UserType};
use classmind_api::state::AppState;

pub const TEST_PASSWORD: &str = "TestPassword123";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: std::net::IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        environment: Environment::Development,
        log_level: "warn".to_string(),
        jwt_secret: "test-secret-key-for-testing-only-32chars".to_string(),
        jwt_access_expiration_secs: 900,
        frontend_url: "http://localhost:3001".to_string(),
    }
}

/// Fresh in-memory `SQLite` database with every migration applied.
pub async fn test_state() -> AppState {
    let db = classmind_api::db::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();

    AppState::new(db, test_config())
}

pub async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    let app = classmind_api::routes::router().with_state(state.clone());
    (app, state)
}

/// Options for [`create_user`]; defaults to a non-admin professor.
#[derive(Debug, Clone)]
pub struct UserSeed {
    pub user_type: UserType,
    pub university_id: Option<i32>,
    pub is_admin: bool,
    pub language: &'static str,
}

impl Default for UserSeed {
    fn default() -> Self {
        Self {
            user_type: UserType::Professor,
            university_id: Some(1),
            is_admin: false,
            language: "pt-br",
        }
    }
}

/// Insert a user with password [`TEST_PASSWORD`] and return it with a bearer token.
pub async fn create_user(
    state: &AppState,
    username: &str,
    seed: UserSeed,
) -> anyhow::Result<(user::Model, String)> {
    let now = Utc::now().fixed_offset();
    let new_user = user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{username}@uni.edu")),
        first_name: Set(username.to_string()),
        last_name: Set("Tester".to_string()),
        password_hash: Set(Some(password::hash_password(TEST_PASSWORD)?)),
        user_type: Set(seed.user_type.as_str().to_string()),
        university_id: Set(seed.university_id),
        is_admin: Set(Some(seed.is_admin)),
        language_preference: Set(seed.language.to_string()),
        theme_preference: Set("light".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let user_model = new_user.insert(&state.db).await?;

    let token = jwt::generate_access_token(
        &user_model,
        &state.config.jwt_secret,
        state.config.jwt_access_expiration_secs,
    )?;

    Ok((user_model, token))
}

pub fn parse(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_default()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<&serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap_or_default(),
        None => builder.body(Body::empty()).unwrap_or_default(),
    }
}

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, request("GET", uri, None, None)).await
}

pub async fn get_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, String) {
    send(app, request("GET", uri, Some(token), None)).await
}

pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> (StatusCode, String) {
    send(app, request("POST", uri, None, Some(body))).await
}

pub async fn post_json_with_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: &serde_json::Value,
) -> (StatusCode, String) {
    send(app, request("POST", uri, Some(token), Some(body))).await
}

pub async fn post_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, String) {
    send(app, request("POST", uri, Some(token), None)).await
}

pub async fn patch_json_with_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: &serde_json::Value,
) -> (StatusCode, String) {
    send(app, request("PATCH", uri, Some(token), Some(body))).await
}

pub async fn delete_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, String) {
    send(app, request("DELETE", uri, Some(token), None)).await
}
