use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("user not found")]
    UserNotFound,

    #[error("email is already registered")]
    EmailAlreadyRegistered,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal server error")]
    InternalServerError,
}
