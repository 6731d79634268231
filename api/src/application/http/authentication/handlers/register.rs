use axum::{Json, extract::State};
use nutridish_core::domain::{
    meal_plan::{ports::MealPlanService, value_objects::GenerateMealPlanInput},
    user::{ports::UserService, value_objects::RegisterUserInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    authentication::validators::RegisterValidator,
    meal_plan::handlers::generate_meal_plan::WeeklyMealPlanResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
    /// A first weekly plan, generated as part of registration.
    pub meal_plan: WeeklyMealPlanResponse,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register",
    description = "Create an account and generate the user's first weekly meal plan",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = RegisterResponse, description = "User registered"),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterValidator>,
) -> Result<Response<RegisterResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let user = state
        .service
        .register(RegisterUserInput {
            username: payload.username,
            email: payload.email,
            password: payload.password,
            date_birth: payload.date_birth,
            location: payload.location,
            eats_pork: payload.eats_pork,
            drinks_alcohol: payload.drinks_alcohol,
        })
        .await
        .map_err(ApiError::from)?;

    let plan = state
        .service
        .generate_weekly_plan(GenerateMealPlanInput {
            user_id: user.id,
            tags: Vec::new(),
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate initial meal plan: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::Created(RegisterResponse {
        message: "User registered successfully".to_string(),
        user_id: user.id,
        meal_plan: WeeklyMealPlanResponse::from(plan),
    }))
}
