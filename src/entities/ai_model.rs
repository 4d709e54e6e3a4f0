use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog of selectable AI models. Agents reference entries here, never own them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub display_name: String,
    pub provider: String,
    /// Subscription tier (1-3) required to use the model.
    pub tier: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::professor_agent::Entity")]
    ProfessorAgents,
}

impl Related<super::professor_agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessorAgents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
