use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct RootHealth {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct DetailedHealth {
    status: &'static str,
    version: &'static str,
    database: DatabaseHealth,
}

#[derive(Serialize)]
struct DatabaseHealth {
    connected: bool,
    latency_ms: u128,
}

/// `GET /health` - liveness probe, never touches the database.
async fn root_health() -> Json<RootHealth> {
    Json(RootHealth {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /api/v1/health` - readiness probe including a database ping.
async fn api_health(State(state): State<AppState>) -> (StatusCode, Json<DetailedHealth>) {
    let started = Instant::now();
    let connected = state.db.ping().await.is_ok();
    let latency_ms = started.elapsed().as_millis();

    if !connected {
        tracing::warn!("Health check: database ping failed");
    }

    let status = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(DetailedHealth {
            status: if connected { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            database: DatabaseHealth {
                connected,
                latency_ms,
            },
        }),
    )
}

pub fn root_router() -> Router<AppState> {
    Router::new().route("/health", get(root_health))
}

pub fn api_router() -> Router<AppState> {
    Router::new().route("/health", get(api_health))
}
