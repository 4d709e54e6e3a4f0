//! Per-entity data access used by the services.
//!
//! Each trait has a SeaORM-backed implementation in [`database`]; unit tests
//! swap in the in-memory versions from `memory`.

pub mod database;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::entities::{ai_model, professor_agent, professor_agent_token, user, UserType};

pub use database::{
    DbAiModelRepository, DbProfessorAgentRepository, DbProfessorAgentTokenRepository,
    DbUserRepository,
};

/// Fields for a new agent row. Timestamps are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewProfessorAgent {
    pub professor_id: i32,
    pub university_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub system_prompt: Option<String>,
    pub tutor_language: String,
    pub ai_model_id: Option<i32>,
    pub is_active: bool,
}

/// Fields for a new access token row.
#[derive(Debug, Clone)]
pub struct NewProfessorAgentToken {
    pub professor_agent_id: i32,
    pub professor_id: i32,
    pub token: String,
    pub name: String,
    pub description: Option<String>,
    pub allow_chat: bool,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<user::Model>, DbErr>;

    async fn get_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr>;

    async fn get_by_type(&self, user_type: UserType) -> Result<Vec<user::Model>, DbErr>;

    async fn get_by_university_id(&self, university_id: i32)
    -> Result<Vec<user::Model>, DbErr>;
}

#[async_trait]
pub trait AiModelRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<ai_model::Model>, DbErr>;
}

#[async_trait]
pub trait ProfessorAgentRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<professor_agent::Model>, DbErr>;

    /// Active or inactive, a professor has at most one row.
    async fn get_by_professor_id(
        &self,
        professor_id: i32,
    ) -> Result<Option<professor_agent::Model>, DbErr>;

    async fn get_by_university_id(
        &self,
        university_id: i32,
    ) -> Result<Vec<professor_agent::Model>, DbErr>;

    async fn get_active(&self) -> Result<Vec<professor_agent::Model>, DbErr>;

    async fn get_all(&self) -> Result<Vec<professor_agent::Model>, DbErr>;

    /// Fails with [`DbErr::RecordNotInserted`] when the professor already has
    /// an agent row.
    async fn add(&self, agent: NewProfessorAgent) -> Result<professor_agent::Model, DbErr>;

    /// Write every column of `agent` and bump `updated_at`.
    async fn update(&self, agent: professor_agent::Model)
    -> Result<professor_agent::Model, DbErr>;
}

#[async_trait]
pub trait ProfessorAgentTokenRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<professor_agent_token::Model>, DbErr>;

    async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<professor_agent_token::Model>, DbErr>;

    async fn get_by_agent_id(
        &self,
        agent_id: i32,
    ) -> Result<Vec<professor_agent_token::Model>, DbErr>;

    async fn add(
        &self,
        token: NewProfessorAgentToken,
    ) -> Result<professor_agent_token::Model, DbErr>;

    async fn update(
        &self,
        token: professor_agent_token::Model,
    ) -> Result<professor_agent_token::Model, DbErr>;
}
