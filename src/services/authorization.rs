//! Capability checks for agent management.
//!
//! Both predicates are pure functions of the caller and the agent so every
//! mutating operation shares one definition of who may do what.

use crate::entities::{professor_agent, user, UserType};

/// The authenticated user on whose behalf an operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i32,
    pub user_type: UserType,
    pub is_admin: bool,
    pub university_id: Option<i32>,
}

impl Caller {
    #[must_use]
    pub const fn is_super_admin(&self) -> bool {
        matches!(self.user_type, UserType::SuperAdmin)
    }

    /// A professor with administrative rights inside their own university.
    #[must_use]
    pub const fn is_admin_professor(&self) -> bool {
        matches!(self.user_type, UserType::Professor) && self.is_admin
    }
}

impl From<&user::Model> for Caller {
    /// Unknown user types are treated as students, the least privileged role.
    fn from(user: &user::Model) -> Self {
        Self {
            user_id: user.id,
            user_type: user.kind().unwrap_or(UserType::Student),
            is_admin: user.is_admin.unwrap_or(false),
            university_id: user.university_id,
        }
    }
}

/// Update, delete, activate and deactivate: super admins, the owner, or an
/// admin-professor of the agent's university.
#[must_use]
pub fn can_manage_agent(caller: &Caller, agent: &professor_agent::Model) -> bool {
    caller.is_super_admin()
        || caller.user_id == agent.professor_id
        || (caller.is_admin_professor() && caller.university_id == Some(agent.university_id))
}

/// Token issuance and revocation: only the owner or a super admin.
/// University admins get no bypass here.
#[must_use]
pub fn can_issue_token(caller: &Caller, agent: &professor_agent::Model) -> bool {
    caller.is_super_admin() || caller.user_id == agent.professor_id
}
