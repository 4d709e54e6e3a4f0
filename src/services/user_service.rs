use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::error::ServiceResult;
use crate::entities::user;
use crate::repositories::{DbUserRepository, UserRepository};

/// Account lookups used by authentication.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn with_database(db: &DatabaseConnection) -> Self {
        Self::new(Arc::new(DbUserRepository::new(db.clone())))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<Option<user::Model>> {
        Ok(self.users.get_by_id(id).await?)
    }

    /// Emails are stored lowercased; the input is trimmed and lowercased to match.
    pub async fn find_by_email(&self, email: &str) -> ServiceResult<Option<user::Model>> {
        let email = email.trim().to_lowercase();
        Ok(self.users.get_by_email(&email).await?)
    }
}
