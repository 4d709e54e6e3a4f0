use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// AI tutoring agent owned by exactly one professor.
///
/// `university_id` is copied from the owner when the agent is created and is
/// never changed on its own afterwards. `is_active = false` is the soft-deleted
/// state; rows are never removed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professor_agent")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub professor_id: i32,
    pub university_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub system_prompt: Option<String>,
    /// Opaque assistant id at the external AI provider.
    pub assistant_id: Option<String>,
    /// Opaque vector store id at the external AI provider.
    pub vector_store_id: Option<String>,
    pub tutor_language: String,
    pub ai_model_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ProfessorId",
        to = "super::user::Column::Id"
    )]
    Professor,
    #[sea_orm(
        belongs_to = "super::ai_model::Entity",
        from = "Column::AiModelId",
        to = "super::ai_model::Column::Id"
    )]
    AiModel,
    #[sea_orm(has_many = "super::professor_agent_token::Entity")]
    Tokens,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::ai_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AiModel.def()
    }
}

impl Related<super::professor_agent_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tokens.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
