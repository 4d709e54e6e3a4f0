use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

/// Public endpoints used by embedded chat widgets. Authenticated by the
/// agent access token in the query string, not by a user session.
pub fn router() -> Router<AppState> {
    Router::new().route("/agent", get(resolve_agent))
}

#[derive(Debug, Deserialize)]
struct WidgetQuery {
    token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetAgentResponse {
    agent_id: i32,
    name: String,
    description: Option<String>,
    tutor_language: String,
    ai_model_id: Option<i32>,
    token_name: String,
    expires_at: Option<String>,
}

/// `GET /widget/agent?token=pat_...`
async fn resolve_agent(
    State(state): State<AppState>,
    Query(query): Query<WidgetQuery>,
) -> Result<Json<WidgetAgentResponse>, AppError> {
    let (token, agent) = state
        .professor_agents
        .resolve_widget_token(query.token.trim())
        .await?;

    Ok(Json(WidgetAgentResponse {
        agent_id: agent.id,
        name: agent.name,
        description: agent.description,
        tutor_language: agent.tutor_language,
        ai_model_id: agent.ai_model_id,
        token_name: token.name,
        expires_at: token.expires_at.map(|e| e.to_rfc3339()),
    }))
}
