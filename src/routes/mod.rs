mod auth;
mod health;
mod professor_agents;
mod widget;

use axum::Router;
use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health`: lightweight liveness check
/// - `/api/v1/health`: detailed health check with database connectivity
/// - `/api/v1/auth/*`: login and current user
/// - `/api/v1/professor-agents/*`: agent lifecycle and access tokens
/// - `/api/v1/widget/*`: token-authenticated widget lookups, callable from any origin
pub fn router() -> Router<AppState> {
    // Widgets are embedded on course sites we do not control.
    let widget_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let api_v1 = Router::new()
        .merge(health::api_router())
        .nest("/auth", auth::router())
        .nest("/professor-agents", professor_agents::router())
        .nest("/widget", widget::router().layer(widget_cors));

    Router::new()
        .merge(health::root_router())
        .nest("/api/v1", api_v1)
}
