use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, SqlErr,
};

use super::{
    AiModelRepository, NewProfessorAgent, NewProfessorAgentToken, ProfessorAgentRepository,
    ProfessorAgentTokenRepository, UserRepository,
};
use crate::entities::{ai_model, professor_agent, professor_agent_token, user, UserType};

#[derive(Debug, Clone)]
pub struct DbUserRepository {
    db: DatabaseConnection,
}

impl DbUserRepository {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for DbUserRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find_by_id(id).one(&self.db).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    async fn get_by_type(&self, user_type: UserType) -> Result<Vec<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::UserType.eq(user_type.as_str()))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
    }

    async fn get_by_university_id(
        &self,
        university_id: i32,
    ) -> Result<Vec<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::UniversityId.eq(university_id))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct DbAiModelRepository {
    db: DatabaseConnection,
}

impl DbAiModelRepository {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AiModelRepository for DbAiModelRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<ai_model::Model>, DbErr> {
        ai_model::Entity::find_by_id(id).one(&self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct DbProfessorAgentRepository {
    db: DatabaseConnection,
}

impl DbProfessorAgentRepository {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfessorAgentRepository for DbProfessorAgentRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<professor_agent::Model>, DbErr> {
        professor_agent::Entity::find_by_id(id).one(&self.db).await
    }

    async fn get_by_professor_id(
        &self,
        professor_id: i32,
    ) -> Result<Option<professor_agent::Model>, DbErr> {
        professor_agent::Entity::find()
            .filter(professor_agent::Column::ProfessorId.eq(professor_id))
            .one(&self.db)
            .await
    }

    async fn get_by_university_id(
        &self,
        university_id: i32,
    ) -> Result<Vec<professor_agent::Model>, DbErr> {
        professor_agent::Entity::find()
            .filter(professor_agent::Column::UniversityId.eq(university_id))
            .order_by_asc(professor_agent::Column::Id)
            .all(&self.db)
            .await
    }

    async fn get_active(&self) -> Result<Vec<professor_agent::Model>, DbErr> {
        professor_agent::Entity::find()
            .filter(professor_agent::Column::IsActive.eq(true))
            .order_by_asc(professor_agent::Column::Id)
            .all(&self.db)
            .await
    }

    async fn get_all(&self) -> Result<Vec<professor_agent::Model>, DbErr> {
        professor_agent::Entity::find()
            .order_by_asc(professor_agent::Column::Id)
            .all(&self.db)
            .await
    }

    async fn add(&self, agent: NewProfessorAgent) -> Result<professor_agent::Model, DbErr> {
        let now = Utc::now().fixed_offset();
        let active = professor_agent::ActiveModel {
            professor_id: Set(agent.professor_id),
            university_id: Set(agent.university_id),
            name: Set(agent.name),
            description: Set(agent.description),
            system_prompt: Set(agent.system_prompt),
            assistant_id: Set(None),
            vector_store_id: Set(None),
            tutor_language: Set(agent.tutor_language),
            ai_model_id: Set(agent.ai_model_id),
            is_active: Set(agent.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(&self.db).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DbErr::RecordNotInserted,
            _ => err,
        })
    }

    async fn update(
        &self,
        agent: professor_agent::Model,
    ) -> Result<professor_agent::Model, DbErr> {
        let mut active = agent.into_active_model().reset_all();
        active.updated_at = Set(Utc::now().fixed_offset());
        active.update(&self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct DbProfessorAgentTokenRepository {
    db: DatabaseConnection,
}

impl DbProfessorAgentTokenRepository {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfessorAgentTokenRepository for DbProfessorAgentTokenRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<professor_agent_token::Model>, DbErr> {
        professor_agent_token::Entity::find_by_id(id)
            .one(&self.db)
            .await
    }

    async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<professor_agent_token::Model>, DbErr> {
        professor_agent_token::Entity::find()
            .filter(professor_agent_token::Column::Token.eq(token))
            .one(&self.db)
            .await
    }

    async fn get_by_agent_id(
        &self,
        agent_id: i32,
    ) -> Result<Vec<professor_agent_token::Model>, DbErr> {
        professor_agent_token::Entity::find()
            .filter(professor_agent_token::Column::ProfessorAgentId.eq(agent_id))
            .order_by_asc(professor_agent_token::Column::Id)
            .all(&self.db)
            .await
    }

    async fn add(
        &self,
        token: NewProfessorAgentToken,
    ) -> Result<professor_agent_token::Model, DbErr> {
        let active = professor_agent_token::ActiveModel {
            professor_agent_id: Set(token.professor_agent_id),
            professor_id: Set(token.professor_id),
            token: Set(token.token),
            name: Set(token.name),
            description: Set(token.description),
            allow_chat: Set(token.allow_chat),
            expires_at: Set(token.expires_at.map(|t| t.fixed_offset())),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        active.insert(&self.db).await
    }

    async fn update(
        &self,
        token: professor_agent_token::Model,
    ) -> Result<professor_agent_token::Model, DbErr> {
        token.into_active_model().reset_all().update(&self.db).await
    }
}
