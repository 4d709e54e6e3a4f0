use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::UserType;

/// Identity record shared by professors, students and super admins.
///
/// `user_type` is the discriminator; see [`UserType`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub user_type: String,
    pub university_id: Option<i32>,
    pub is_admin: Option<bool>,
    pub language_preference: String,
    pub theme_preference: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::professor_agent::Entity")]
    ProfessorAgent,
}

impl Related<super::professor_agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessorAgent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Parsed discriminator, `None` for unknown values.
    #[must_use]
    pub fn kind(&self) -> Option<UserType> {
        UserType::from_str(&self.user_type)
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
