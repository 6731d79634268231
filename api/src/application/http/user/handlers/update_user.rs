use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use nutridish_core::domain::user::{
    entities::User,
    ports::UserService,
    value_objects::UpdateUserInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::UpdateUserValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateUserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub date_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub eats_pork: bool,
    pub drinks_alcohol: bool,
}

impl From<User> for UpdateUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            date_birth: user.date_birth,
            location: user.location,
            eats_pork: user.eats_pork,
            drinks_alcohol: user.drinks_alcohol,
        }
    }
}

#[utoipa::path(
    put,
    path = "/{user_id}",
    tag = "user",
    summary = "Update user",
    description = "Partially update a profile; email and password cannot be changed here",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = UpdateUserResponse, description = "Profile updated"),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserValidator>,
) -> Result<Response<UpdateUserResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let user = state
        .service
        .update_user(UpdateUserInput {
            user_id,
            username: payload.username,
            date_birth: payload.date_birth,
            location: payload.location,
            eats_pork: payload.eats_pork,
            drinks_alcohol: payload.drinks_alcohol,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateUserResponse::from(user)))
}
