use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutridish_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::InternalServerError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL"),
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::UserNotFound => ApiError::NotFound("user not found".to_string()),
            CoreError::EmailAlreadyRegistered => {
                ApiError::Conflict("email is already registered".to_string())
            }
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("invalid email or password".to_string())
            }
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_http_semantics() {
        assert_eq!(
            ApiError::from(CoreError::UserNotFound),
            ApiError::NotFound("user not found".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::EmailAlreadyRegistered),
            ApiError::Conflict("email is already registered".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidCredentials),
            ApiError::Unauthorized("invalid email or password".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidInput("bad tag".to_string())),
            ApiError::BadRequest("bad tag".to_string())
        );
    }

    #[test]
    fn responses_carry_the_matching_status_code() {
        let response = ApiError::NotFound("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Conflict("dup".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = ApiError::Unauthorized("no".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
