use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator stored in `user.user_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Professor,
    Student,
    SuperAdmin,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl UserType {
    /// Convert from database string representation
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "professor" => Some(Self::Professor),
            "student" => Some(Self::Student),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Convert to database string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::Student => "student",
            Self::SuperAdmin => "super_admin",
        }
    }
}
