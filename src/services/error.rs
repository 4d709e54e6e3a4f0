use sea_orm::DbErr;
use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure kinds surfaced by the service layer.
///
/// The HTTP layer maps `NotFound`, `Unauthorized` and the two validation kinds
/// to distinct status codes, so they must never be collapsed into each other.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A referenced agent, professor, token or AI model does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller lacks the role or ownership the operation requires.
    #[error("{0}")]
    Unauthorized(String),

    /// The request is well-formed but breaks a business rule.
    #[error("{0}")]
    InvalidOperation(String),

    /// A supplied field failed validation.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
