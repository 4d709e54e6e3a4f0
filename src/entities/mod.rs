pub mod ai_model;
pub mod professor_agent;
pub mod professor_agent_token;
pub mod user;
pub mod user_type;

pub use user_type::UserType;
