use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Capability token granting chat access to one agent (widget embedding).
///
/// The token value is stored in plaintext so it can be shown again to the
/// owner; revoking means clearing `allow_chat`. `professor_id` mirrors the
/// agent's owner at creation time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professor_agent_token")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub professor_agent_id: i32,
    pub professor_id: i32,
    #[sea_orm(unique)]
    pub token: String,
    pub name: String,
    pub description: Option<String>,
    pub allow_chat: bool,
    pub expires_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::professor_agent::Entity",
        from = "Column::ProfessorAgentId",
        to = "super::professor_agent::Column::Id"
    )]
    ProfessorAgent,
}

impl Related<super::professor_agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessorAgent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Chat is allowed and the token has not expired at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.allow_chat && self.expires_at.is_none_or(|exp| exp > now)
    }
}
