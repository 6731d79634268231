use axum::extract::{Path, State};
use chrono::{DateTime, NaiveDate, Utc};
use nutridish_core::domain::user::{entities::User, ports::UserService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub date_birth: Option<NaiveDate>,
    pub age: Option<i32>,
    pub location: Option<String>,
    pub eats_pork: bool,
    pub drinks_alcohol: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for GetUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            date_birth: user.date_birth,
            age: user.age(),
            location: user.location.clone(),
            eats_pork: user.eats_pork,
            drinks_alcohol: user.drinks_alcohol,
            created_at: user.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    description = "Fetch a user's profile; the age is derived from the date of birth",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = GetUserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetUserResponse>, ApiError> {
    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserResponse::from(user)))
}
