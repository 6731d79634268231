use axum::{Json, extract::State};
use nutridish_core::domain::user::{ports::UserService, value_objects::LoginUserInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    authentication::validators::LoginValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Login",
    description = "Verify credentials and return the account id",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginResponse, description = "Login successful"),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let user = state
        .service
        .login(LoginUserInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        message: "Login successful".to_string(),
        user_id: user.id,
    }))
}
