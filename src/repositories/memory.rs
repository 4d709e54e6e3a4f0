//! In-memory repositories for service unit tests. Write counters let tests
//! assert that an operation did (or did not) reach the store.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;

use super::{
    AiModelRepository, NewProfessorAgent, NewProfessorAgentToken, ProfessorAgentRepository,
    ProfessorAgentTokenRepository, UserRepository,
};
use crate::entities::{ai_model, professor_agent, professor_agent_token, user, UserType};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<user::Model>>,
}

impl InMemoryUsers {
    pub fn with(rows: Vec<user::Model>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn get_by_id(&self, id: i32) -> Result<Option<user::Model>, DbErr> {
        Ok(lock(&self.rows).iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr> {
        Ok(lock(&self.rows).iter().find(|u| u.email == email).cloned())
    }

    async fn get_by_type(&self, user_type: UserType) -> Result<Vec<user::Model>, DbErr> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|u| u.user_type == user_type.as_str())
            .cloned()
            .collect())
    }

    async fn get_by_university_id(
        &self,
        university_id: i32,
    ) -> Result<Vec<user::Model>, DbErr> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|u| u.university_id == Some(university_id))
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAiModels {
    rows: Mutex<Vec<ai_model::Model>>,
}

impl InMemoryAiModels {
    pub fn with(rows: Vec<ai_model::Model>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl AiModelRepository for InMemoryAiModels {
    async fn get_by_id(&self, id: i32) -> Result<Option<ai_model::Model>, DbErr> {
        Ok(lock(&self.rows).iter().find(|m| m.id == id).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAgents {
    rows: Mutex<Vec<professor_agent::Model>>,
    adds: AtomicUsize,
    updates: AtomicUsize,
    stale_owner_lookups: AtomicBool,
}

impl InMemoryAgents {
    pub fn with(rows: Vec<professor_agent::Model>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    pub fn add_calls(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
    }

    /// Make `get_by_professor_id` miss existing rows, as when another request
    /// inserts between the existence check and the insert.
    pub fn serve_stale_owner_lookups(&self) {
        self.stale_owner_lookups.store(true, Ordering::SeqCst);
    }

    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn stored(&self, id: i32) -> Option<professor_agent::Model> {
        lock(&self.rows).iter().find(|a| a.id == id).cloned()
    }
}

#[async_trait]
impl ProfessorAgentRepository for InMemoryAgents {
    async fn get_by_id(&self, id: i32) -> Result<Option<professor_agent::Model>, DbErr> {
        Ok(self.stored(id))
    }

    async fn get_by_professor_id(
        &self,
        professor_id: i32,
    ) -> Result<Option<professor_agent::Model>, DbErr> {
        if self.stale_owner_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(lock(&self.rows)
            .iter()
            .find(|a| a.professor_id == professor_id)
            .cloned())
    }

    async fn get_by_university_id(
        &self,
        university_id: i32,
    ) -> Result<Vec<professor_agent::Model>, DbErr> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|a| a.university_id == university_id)
            .cloned()
            .collect())
    }

    async fn get_active(&self) -> Result<Vec<professor_agent::Model>, DbErr> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|a| a.is_active)
            .cloned()
            .collect())
    }

    async fn get_all(&self) -> Result<Vec<professor_agent::Model>, DbErr> {
        Ok(lock(&self.rows).clone())
    }

    async fn add(&self, agent: NewProfessorAgent) -> Result<professor_agent::Model, DbErr> {
        self.adds.fetch_add(1, Ordering::SeqCst);
        let mut rows = lock(&self.rows);
        if rows.iter().any(|a| a.professor_id == agent.professor_id) {
            return Err(DbErr::RecordNotInserted);
        }
        let now = Utc::now().fixed_offset();
        let model = professor_agent::Model {
            id: rows.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            professor_id: agent.professor_id,
            university_id: agent.university_id,
            name: agent.name,
            description: agent.description,
            system_prompt: agent.system_prompt,
            assistant_id: None,
            vector_store_id: None,
            tutor_language: agent.tutor_language,
            ai_model_id: agent.ai_model_id,
            is_active: agent.is_active,
            created_at: now,
            updated_at: now,
        };
        rows.push(model.clone());
        Ok(model)
    }

    async fn update(
        &self,
        agent: professor_agent::Model,
    ) -> Result<professor_agent::Model, DbErr> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut rows = lock(&self.rows);
        let slot = rows
            .iter_mut()
            .find(|a| a.id == agent.id)
            .ok_or(DbErr::RecordNotUpdated)?;
        *slot = professor_agent::Model {
            updated_at: Utc::now().fixed_offset(),
            ..agent
        };
        Ok(slot.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTokens {
    rows: Mutex<Vec<professor_agent_token::Model>>,
    adds: AtomicUsize,
}

impl InMemoryTokens {
    pub fn add_calls(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfessorAgentTokenRepository for InMemoryTokens {
    async fn get_by_id(&self, id: i32) -> Result<Option<professor_agent_token::Model>, DbErr> {
        Ok(lock(&self.rows).iter().find(|t| t.id == id).cloned())
    }

    async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<professor_agent_token::Model>, DbErr> {
        Ok(lock(&self.rows).iter().find(|t| t.token == token).cloned())
    }

    async fn get_by_agent_id(
        &self,
        agent_id: i32,
    ) -> Result<Vec<professor_agent_token::Model>, DbErr> {
        Ok(lock(&self.rows)
            .iter()
            .filter(|t| t.professor_agent_id == agent_id)
            .cloned()
            .collect())
    }

    async fn add(
        &self,
        token: NewProfessorAgentToken,
    ) -> Result<professor_agent_token::Model, DbErr> {
        self.adds.fetch_add(1, Ordering::SeqCst);
        let mut rows = lock(&self.rows);
        let model = professor_agent_token::Model {
            id: rows.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            professor_agent_id: token.professor_agent_id,
            professor_id: token.professor_id,
            token: token.token,
            name: token.name,
            description: token.description,
            allow_chat: token.allow_chat,
            expires_at: token.expires_at.map(|t| t.fixed_offset()),
            created_at: Utc::now().fixed_offset(),
        };
        rows.push(model.clone());
        Ok(model)
    }

    async fn update(
        &self,
        token: professor_agent_token::Model,
    ) -> Result<professor_agent_token::Model, DbErr> {
        let mut rows = lock(&self.rows);
        let slot = rows
            .iter_mut()
            .find(|t| t.id == token.id)
            .ok_or(DbErr::RecordNotUpdated)?;
        *slot = token;
        Ok(slot.clone())
    }
}
