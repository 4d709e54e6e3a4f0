use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::services::{ProfessorAgentService, UserService};

/// Shared application state available to all request handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub professor_agents: ProfessorAgentService,
    pub users: UserService,
}

impl AppState {
    /// Build the state with services backed by `db`.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let professor_agents = ProfessorAgentService::with_database(&db);
        let users = UserService::with_database(&db);
        Self {
            db,
            config,
            professor_agents,
            users,
        }
    }
}
