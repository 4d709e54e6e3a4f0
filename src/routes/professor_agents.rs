use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    auth::middleware::{AdminUser, AuthUser},
    entities::{professor_agent, professor_agent_token},
    error::AppError,
    services::{can_issue_token, AgentUpdate, NewAgent, NewToken, ProfessorAgentStatus},
    state::AppState,
};

/// Professor agent router, mounted at `/professor-agents`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_agents).post(create_agent))
        .route("/status", get(agent_status))
        .route("/me", get(get_my_agent))
        .route("/professor/{professor_id}", get(get_agent_by_professor))
        .route("/{id}", patch(update_agent).delete(delete_agent))
        .route("/{id}/activate", post(activate_agent))
        .route("/{id}/deactivate", post(deactivate_agent))
        .route("/{id}/tokens", post(create_token).get(list_tokens))
        .route("/tokens/{token_id}/revoke", post(revoke_token))
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UniversityQuery {
    university_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAgentRequest {
    /// Only honoured for super admins; professors always create for themselves.
    professor_id: Option<i32>,
    name: String,
    description: Option<String>,
    system_prompt: Option<String>,
    tutor_language: Option<String>,
    ai_model_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAgentRequest {
    name: Option<String>,
    description: Option<String>,
    system_prompt: Option<String>,
    tutor_language: Option<String>,
    ai_model_id: Option<i32>,
    is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTokenRequest {
    name: String,
    description: Option<String>,
    #[serde(default = "default_allow_chat")]
    allow_chat: bool,
    expires_at: Option<DateTime<Utc>>,
}

const fn default_allow_chat() -> bool {
    true
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    id: i32,
    professor_id: i32,
    university_id: i32,
    name: String,
    description: Option<String>,
    system_prompt: Option<String>,
    assistant_id: Option<String>,
    vector_store_id: Option<String>,
    tutor_language: String,
    ai_model_id: Option<i32>,
    is_active: bool,
    created_at: String,
    updated_at: String,
}

impl From<professor_agent::Model> for AgentResponse {
    fn from(a: professor_agent::Model) -> Self {
        Self {
            id: a.id,
            professor_id: a.professor_id,
            university_id: a.university_id,
            name: a.name,
            description: a.description,
            system_prompt: a.system_prompt,
            assistant_id: a.assistant_id,
            vector_store_id: a.vector_store_id,
            tutor_language: a.tutor_language,
            ai_model_id: a.ai_model_id,
            is_active: a.is_active,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    id: i32,
    professor_agent_id: i32,
    professor_id: i32,
    token: String,
    name: String,
    description: Option<String>,
    allow_chat: bool,
    is_valid: bool,
    expires_at: Option<String>,
    created_at: String,
}

impl From<professor_agent_token::Model> for TokenResponse {
    fn from(t: professor_agent_token::Model) -> Self {
        Self {
            is_valid: t.is_valid_at(Utc::now()),
            id: t.id,
            professor_agent_id: t.professor_agent_id,
            professor_id: t.professor_id,
            token: t.token,
            name: t.name,
            description: t.description,
            allow_chat: t.allow_chat,
            expires_at: t.expires_at.map(|e| e.to_rfc3339()),
            created_at: t.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Agent Handlers
// ============================================================================

/// `GET /professor-agents`: All agents of a university, or every active agent.
async fn list_agents(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Query(query): Query<UniversityQuery>,
) -> Result<Json<Vec<AgentResponse>>, AppError> {
    let agents = state
        .professor_agents
        .get_all_agents(query.university_id)
        .await?;
    Ok(Json(agents.into_iter().map(AgentResponse::from).collect()))
}

/// `GET /professor-agents/status`: Which professors have an agent.
///
/// Admin-professors are pinned to their own university.
async fn agent_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Query(query): Query<UniversityQuery>,
) -> Result<Json<Vec<ProfessorAgentStatus>>, AppError> {
    let caller = admin.caller();

    let university_id = if caller.is_super_admin() {
        query.university_id
    } else {
        match (query.university_id, caller.university_id) {
            (_, None) => {
                return Err(AppError::Forbidden(
                    "You are not associated with a university.".to_string(),
                ));
            }
            (Some(requested), Some(own)) if requested != own => {
                return Err(AppError::Forbidden(
                    "You can only view your own university.".to_string(),
                ));
            }
            (_, own) => own,
        }
    };

    let rows = state
        .professor_agents
        .get_professor_agent_status(university_id)
        .await?;
    Ok(Json(rows))
}

/// `GET /professor-agents/me`: The caller's own agent.
async fn get_my_agent(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<AgentResponse>, AppError> {
    let agent = state
        .professor_agents
        .get_by_professor_id(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("You do not have an agent yet.".to_string()))?;
    Ok(Json(agent.into()))
}

/// `GET /professor-agents/professor/:professor_id`
async fn get_agent_by_professor(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(professor_id): Path<i32>,
) -> Result<Json<AgentResponse>, AppError> {
    let agent = state
        .professor_agents
        .get_by_professor_id(professor_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Professor {professor_id} does not have an agent."))
        })?;
    Ok(Json(agent.into()))
}

/// `POST /professor-agents`: Create an agent.
async fn create_agent(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAgentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let caller = auth.caller();

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required.".to_string()));
    }

    let professor_id = match req.professor_id {
        Some(id) if caller.is_super_admin() => id,
        Some(id) if id != caller.user_id => {
            return Err(AppError::Forbidden(
                "You can only create an agent for yourself.".to_string(),
            ));
        }
        _ => caller.user_id,
    };

    let agent = state
        .professor_agents
        .create_agent(NewAgent {
            professor_id,
            name: req.name.trim().to_string(),
            description: req.description,
            system_prompt: req.system_prompt,
            tutor_language: req.tutor_language,
            ai_model_id: req.ai_model_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AgentResponse::from(agent))))
}

/// `PATCH /professor-agents/:id`: Partial update.
async fn update_agent(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(req): Json<UpdateAgentRequest>,
) -> Result<Json<AgentResponse>, AppError> {
    let agent = state
        .professor_agents
        .update_agent(
            id,
            &auth.caller(),
            AgentUpdate {
                name: req.name,
                description: req.description,
                system_prompt: req.system_prompt,
                tutor_language: req.tutor_language,
                ai_model_id: req.ai_model_id,
                is_active: req.is_active,
            },
        )
        .await?;
    Ok(Json(agent.into()))
}

/// `DELETE /professor-agents/:id`: Soft delete.
async fn delete_agent(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state
        .professor_agents
        .delete_agent(id, &auth.caller())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /professor-agents/:id/activate`
async fn activate_agent(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<AgentResponse>, AppError> {
    let agent = state
        .professor_agents
        .activate_agent(id, &auth.caller())
        .await?;
    Ok(Json(agent.into()))
}

/// `POST /professor-agents/:id/deactivate`
async fn deactivate_agent(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<AgentResponse>, AppError> {
    let agent = state
        .professor_agents
        .deactivate_agent(id, &auth.caller())
        .await?;
    Ok(Json(agent.into()))
}

// ============================================================================
// Token Handlers
// ============================================================================

/// `POST /professor-agents/:id/tokens`: Issue a widget access token.
async fn create_token(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(req): Json<CreateTokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Token name is required.".to_string()));
    }

    let token = state
        .professor_agents
        .create_token(
            id,
            &auth.caller(),
            NewToken {
                name: req.name.trim().to_string(),
                description: req.description,
                allow_chat: req.allow_chat,
                expires_at: req.expires_at,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TokenResponse::from(token))))
}

/// `GET /professor-agents/:id/tokens`
async fn list_tokens(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TokenResponse>>, AppError> {
    let agent = state.professor_agents.get_agent(id).await?;
    if !can_issue_token(&auth.caller(), &agent) {
        return Err(AppError::Forbidden(
            "Only the agent owner or a super admin can view its tokens.".to_string(),
        ));
    }

    let tokens = state.professor_agents.get_tokens_by_agent_id(id).await?;
    Ok(Json(tokens.into_iter().map(TokenResponse::from).collect()))
}

/// `POST /professor-agents/tokens/:token_id/revoke`
async fn revoke_token(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(token_id): Path<i32>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state
        .professor_agents
        .revoke_token(token_id, &auth.caller())
        .await?;
    Ok(Json(token.into()))
}
