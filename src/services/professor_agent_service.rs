use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;

use super::authorization::{can_issue_token, can_manage_agent, Caller};
use super::error::{ServiceError, ServiceResult};
use crate::entities::{professor_agent, professor_agent_token, user, UserType};
use crate::repositories::{
    AiModelRepository, DbAiModelRepository, DbProfessorAgentRepository,
    DbProfessorAgentTokenRepository, DbUserRepository, NewProfessorAgent, NewProfessorAgentToken,
    ProfessorAgentRepository, ProfessorAgentTokenRepository, UserRepository,
};
use crate::utils::{generate_access_token, is_valid_access_token};

/// Languages an agent may tutor in.
pub const ALLOWED_TUTOR_LANGUAGES: &[&str] = &["pt-br", "en", "es", "fr", "de", "it"];

/// Input for [`ProfessorAgentService::create_agent`].
#[derive(Debug, Clone, Default)]
pub struct NewAgent {
    pub professor_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub system_prompt: Option<String>,
    /// Falls back to the professor's language preference.
    pub tutor_language: Option<String>,
    pub ai_model_id: Option<i32>,
}

/// Partial update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub system_prompt: Option<String>,
    pub tutor_language: Option<String>,
    pub ai_model_id: Option<i32>,
    pub is_active: Option<bool>,
}

/// Input for [`ProfessorAgentService::create_token`].
#[derive(Debug, Clone)]
pub struct NewToken {
    pub name: String,
    pub description: Option<String>,
    pub allow_chat: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

/// One row of the per-professor agent status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorAgentStatus {
    pub professor_id: i32,
    pub professor_name: String,
    pub professor_email: String,
    pub university_id: Option<i32>,
    pub has_agent: bool,
    pub agent_id: Option<i32>,
    pub agent_name: Option<String>,
    pub agent_is_active: Option<bool>,
    pub agent_created_at: Option<String>,
}

impl ProfessorAgentStatus {
    fn new(professor: user::Model, agent: Option<&professor_agent::Model>) -> Self {
        Self {
            professor_name: professor.full_name(),
            professor_id: professor.id,
            professor_email: professor.email,
            university_id: professor.university_id,
            has_agent: agent.is_some(),
            agent_id: agent.map(|a| a.id),
            agent_name: agent.map(|a| a.name.clone()),
            agent_is_active: agent.map(|a| a.is_active),
            agent_created_at: agent.map(|a| a.created_at.to_rfc3339()),
        }
    }
}

/// Business rules for professor agents and their access tokens.
#[derive(Clone)]
pub struct ProfessorAgentService {
    users: Arc<dyn UserRepository>,
    ai_models: Arc<dyn AiModelRepository>,
    agents: Arc<dyn ProfessorAgentRepository>,
    tokens: Arc<dyn ProfessorAgentTokenRepository>,
}

impl ProfessorAgentService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        ai_models: Arc<dyn AiModelRepository>,
        agents: Arc<dyn ProfessorAgentRepository>,
        tokens: Arc<dyn ProfessorAgentTokenRepository>,
    ) -> Self {
        Self {
            users,
            ai_models,
            agents,
            tokens,
        }
    }

    /// Wire the service to the SeaORM repositories.
    #[must_use]
    pub fn with_database(db: &DatabaseConnection) -> Self {
        Self::new(
            Arc::new(DbUserRepository::new(db.clone())),
            Arc::new(DbAiModelRepository::new(db.clone())),
            Arc::new(DbProfessorAgentRepository::new(db.clone())),
            Arc::new(DbProfessorAgentTokenRepository::new(db.clone())),
        )
    }

    pub async fn get_agent(&self, agent_id: i32) -> ServiceResult<professor_agent::Model> {
        self.load_agent(agent_id).await
    }

    /// Plain lookup; absence is not an error.
    pub async fn get_by_professor_id(
        &self,
        professor_id: i32,
    ) -> ServiceResult<Option<professor_agent::Model>> {
        Ok(self.agents.get_by_professor_id(professor_id).await?)
    }

    /// A university scope returns active and inactive agents; the global listing
    /// only returns active ones.
    pub async fn get_all_agents(
        &self,
        university_id: Option<i32>,
    ) -> ServiceResult<Vec<professor_agent::Model>> {
        let agents = match university_id {
            Some(id) => self.agents.get_by_university_id(id).await?,
            None => self.agents.get_active().await?,
        };
        Ok(agents)
    }

    pub async fn create_agent(&self, input: NewAgent) -> ServiceResult<professor_agent::Model> {
        let professor = self
            .users
            .get_by_id(input.professor_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "Professor with ID {} not found",
                    input.professor_id
                ))
            })?;

        if professor.kind() != Some(UserType::Professor) {
            return Err(ServiceError::InvalidOperation(format!(
                "User {} is not a professor",
                professor.id
            )));
        }

        let university_id = professor.university_id.ok_or_else(|| {
            ServiceError::InvalidOperation(format!(
                "Professor {} is not associated with a university",
                professor.id
            ))
        })?;

        if self
            .agents
            .get_by_professor_id(professor.id)
            .await?
            .is_some()
        {
            return Err(already_has_agent(professor.id));
        }

        let tutor_language = input
            .tutor_language
            .unwrap_or_else(|| professor.language_preference.clone());

        if let Some(model_id) = input.ai_model_id {
            self.ensure_ai_model_exists(model_id).await?;
        }

        let agent = self
            .agents
            .add(NewProfessorAgent {
                professor_id: professor.id,
                university_id,
                name: input.name,
                description: input.description,
                system_prompt: input.system_prompt,
                tutor_language,
                ai_model_id: input.ai_model_id,
                is_active: true,
            })
            .await
            .map_err(|err| match err {
                DbErr::RecordNotInserted => already_has_agent(professor.id),
                err => ServiceError::Database(err),
            })?;

        tracing::info!(
            agent_id = agent.id,
            professor_id = agent.professor_id,
            university_id = agent.university_id,
            "Professor agent created"
        );

        Ok(agent)
    }

    pub async fn update_agent(
        &self,
        agent_id: i32,
        caller: &Caller,
        update: AgentUpdate,
    ) -> ServiceResult<professor_agent::Model> {
        let mut agent = self.load_manageable_agent(agent_id, caller).await?;

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ServiceError::InvalidArgument(
                    "Name cannot be empty".to_string(),
                ));
            }
            agent.name = name;
        }

        if let Some(description) = update.description {
            agent.description = Some(description);
        }

        if let Some(prompt) = update.system_prompt {
            if prompt.trim().is_empty() {
                return Err(ServiceError::InvalidArgument(
                    "System prompt cannot be empty".to_string(),
                ));
            }
            agent.system_prompt = Some(prompt);
        }

        if let Some(language) = update.tutor_language {
            if !ALLOWED_TUTOR_LANGUAGES.contains(&language.as_str()) {
                return Err(ServiceError::InvalidArgument(format!(
                    "Invalid tutor language '{language}'. Allowed: {}",
                    ALLOWED_TUTOR_LANGUAGES.join(", ")
                )));
            }
            agent.tutor_language = language;
        }

        if let Some(model_id) = update.ai_model_id {
            self.ensure_ai_model_exists(model_id).await?;
            agent.ai_model_id = Some(model_id);
        }

        if let Some(is_active) = update.is_active {
            agent.is_active = is_active;
        }

        let agent = self.agents.update(agent).await?;
        tracing::info!(agent_id = agent.id, caller_id = caller.user_id, "Professor agent updated");
        Ok(agent)
    }

    /// Soft delete: the row and its tokens stay, the agent just stops being active.
    pub async fn delete_agent(&self, agent_id: i32, caller: &Caller) -> ServiceResult<()> {
        self.set_active(agent_id, caller, false).await?;
        tracing::info!(agent_id, caller_id = caller.user_id, "Professor agent deleted");
        Ok(())
    }

    pub async fn activate_agent(
        &self,
        agent_id: i32,
        caller: &Caller,
    ) -> ServiceResult<professor_agent::Model> {
        self.set_active(agent_id, caller, true).await
    }

    pub async fn deactivate_agent(
        &self,
        agent_id: i32,
        caller: &Caller,
    ) -> ServiceResult<professor_agent::Model> {
        self.set_active(agent_id, caller, false).await
    }

    pub async fn create_token(
        &self,
        agent_id: i32,
        caller: &Caller,
        input: NewToken,
    ) -> ServiceResult<professor_agent_token::Model> {
        let agent = self.load_agent(agent_id).await?;

        if !can_issue_token(caller, &agent) {
            return Err(ServiceError::Unauthorized(
                "Only the agent owner or a super admin can manage its tokens".to_string(),
            ));
        }

        let token = self
            .tokens
            .add(NewProfessorAgentToken {
                professor_agent_id: agent.id,
                professor_id: agent.professor_id,
                token: generate_access_token(),
                name: input.name,
                description: input.description,
                allow_chat: input.allow_chat,
                expires_at: input.expires_at,
            })
            .await?;

        tracing::info!(
            token_id = token.id,
            agent_id = agent.id,
            caller_id = caller.user_id,
            "Agent access token issued"
        );

        Ok(token)
    }

    /// No authorization at this layer.
    pub async fn get_tokens_by_agent_id(
        &self,
        agent_id: i32,
    ) -> ServiceResult<Vec<professor_agent_token::Model>> {
        Ok(self.tokens.get_by_agent_id(agent_id).await?)
    }

    /// Revoke by disabling chat; the token row is kept for auditing.
    pub async fn revoke_token(
        &self,
        token_id: i32,
        caller: &Caller,
    ) -> ServiceResult<professor_agent_token::Model> {
        let mut token = self.tokens.get_by_id(token_id).await?.ok_or_else(|| {
            ServiceError::NotFound(format!("Token with ID {token_id} not found"))
        })?;
        let agent = self.load_agent(token.professor_agent_id).await?;

        if !can_issue_token(caller, &agent) {
            return Err(ServiceError::Unauthorized(
                "Only the agent owner or a super admin can manage its tokens".to_string(),
            ));
        }

        token.allow_chat = false;
        let token = self.tokens.update(token).await?;
        tracing::info!(token_id, agent_id = agent.id, "Agent access token revoked");
        Ok(token)
    }

    /// Resolve a plaintext token presented by an embedded widget to its agent.
    ///
    /// Values that cannot have been issued by [`generate_access_token`] are
    /// rejected without a lookup.
    pub async fn resolve_widget_token(
        &self,
        value: &str,
    ) -> ServiceResult<(professor_agent_token::Model, professor_agent::Model)> {
        if !is_valid_access_token(value) {
            return Err(ServiceError::NotFound("Token not found".to_string()));
        }

        let token = self
            .tokens
            .get_by_token(value)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Token not found".to_string()))?;

        if !token.is_valid_at(Utc::now()) {
            return Err(ServiceError::Unauthorized(
                "Token is expired or chat is disabled".to_string(),
            ));
        }

        let agent = self
            .agents
            .get_by_id(token.professor_agent_id)
            .await?
            .filter(|agent| agent.is_active)
            .ok_or_else(|| ServiceError::NotFound("Agent is not available".to_string()))?;

        Ok((token, agent))
    }

    /// Every professor (optionally within one university) left-joined with
    /// their agent, inactive agents included.
    pub async fn get_professor_agent_status(
        &self,
        university_id: Option<i32>,
    ) -> ServiceResult<Vec<ProfessorAgentStatus>> {
        let professors: Vec<user::Model> = match university_id {
            Some(id) => self
                .users
                .get_by_university_id(id)
                .await?
                .into_iter()
                .filter(|u| u.kind() == Some(UserType::Professor))
                .collect(),
            None => self.users.get_by_type(UserType::Professor).await?,
        };

        if professors.is_empty() {
            return Ok(Vec::new());
        }

        let agents = self.agents.get_all().await?;
        let by_professor: HashMap<i32, &professor_agent::Model> =
            agents.iter().map(|a| (a.professor_id, a)).collect();

        Ok(professors
            .into_iter()
            .map(|professor| {
                let agent = by_professor.get(&professor.id).copied();
                ProfessorAgentStatus::new(professor, agent)
            })
            .collect())
    }

    async fn set_active(
        &self,
        agent_id: i32,
        caller: &Caller,
        is_active: bool,
    ) -> ServiceResult<professor_agent::Model> {
        let mut agent = self.load_manageable_agent(agent_id, caller).await?;
        agent.is_active = is_active;
        let agent = self.agents.update(agent).await?;
        tracing::info!(agent_id, is_active, "Professor agent status changed");
        Ok(agent)
    }

    async fn load_agent(&self, agent_id: i32) -> ServiceResult<professor_agent::Model> {
        self.agents
            .get_by_id(agent_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Agent with ID {agent_id} not found")))
    }

    async fn load_manageable_agent(
        &self,
        agent_id: i32,
        caller: &Caller,
    ) -> ServiceResult<professor_agent::Model> {
        let agent = self.load_agent(agent_id).await?;
        if !can_manage_agent(caller, &agent) {
            return Err(ServiceError::Unauthorized(
                "You are not authorized to manage this agent".to_string(),
            ));
        }
        Ok(agent)
    }

    async fn ensure_ai_model_exists(&self, model_id: i32) -> ServiceResult<()> {
        if self.ai_models.get_by_id(model_id).await?.is_none() {
            return Err(ServiceError::InvalidArgument(format!(
                "AI Model with ID {model_id} not found"
            )));
        }
        Ok(())
    }
}

fn already_has_agent(professor_id: i32) -> ServiceError {
    ServiceError::InvalidOperation(format!("Professor {professor_id} already has an agent"))
}
