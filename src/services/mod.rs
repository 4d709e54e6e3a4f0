pub mod authorization;
pub mod error;
pub mod professor_agent_service;
pub mod user_service;

pub use authorization::{can_issue_token, can_manage_agent, Caller};
pub use error::ServiceError;
pub use professor_agent_service::{
    AgentUpdate, NewAgent, NewToken, ProfessorAgentService, ProfessorAgentStatus,
    ALLOWED_TUTOR_LANGUAGES,
};
pub use user_service::UserService;
