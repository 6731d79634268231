use axum::{Json, extract::State};
use chrono::NaiveDate;
use nutridish_core::domain::{
    recipe::{
        entities::{Nutrition, Recipe},
        value_objects::MealSlot,
    },
    recommendation::{
        ports::RecommendationService,
        value_objects::{ClockTime, DailyRecommendationsInput},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DailyRecommendationsRequest {
    pub user_id: Uuid,
    /// Local wall-clock time, "HH:MM".
    pub current_time: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendedRecipe {
    pub title: String,
    pub image: Option<String>,
    pub dietary: Vec<String>,
    pub nutrition: Nutrition,
    pub rating: f64,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub categories: Vec<String>,
    pub description: Option<String>,
    pub published_at: Option<NaiveDate>,
}

impl From<Recipe> for RecommendedRecipe {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            image: recipe.image,
            dietary: recipe.dietary.labels(),
            nutrition: recipe.nutrition,
            rating: recipe.rating,
            ingredients: recipe.ingredients,
            directions: recipe.directions,
            categories: recipe.categories,
            description: recipe.description,
            published_at: recipe.published_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DailyRecommendationsResponse {
    pub meal_slot: MealSlot,
    pub provided_time: String,
    pub recommendations: Vec<RecommendedRecipe>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recommendation",
    summary = "Daily recommendations",
    description = "Sample recipes for the meal slot matching the provided time, honoring the user's consumption preferences",
    request_body = DailyRecommendationsRequest,
    responses(
        (status = 200, body = DailyRecommendationsResponse),
        (status = 400, description = "Invalid current_time format"),
        (status = 404, description = "User unknown or no matching recipes")
    )
)]
pub async fn daily_recommendations(
    State(state): State<AppState>,
    Json(request): Json<DailyRecommendationsRequest>,
) -> Result<Response<DailyRecommendationsResponse>, ApiError> {
    let current_time = ClockTime::parse(&request.current_time).ok_or_else(|| {
        ApiError::BadRequest("invalid current_time format, expected HH:MM".to_string())
    })?;

    let recommendations = state
        .service
        .daily_recommendations(DailyRecommendationsInput {
            user_id: request.user_id,
            current_time,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to build daily recommendations: {}", e);
            ApiError::from(e)
        })?;

    if recommendations.recipes.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no {} recipes found matching your preferences",
            recommendations.meal_slot
        )));
    }

    Ok(Response::OK(DailyRecommendationsResponse {
        meal_slot: recommendations.meal_slot,
        provided_time: current_time.to_string(),
        recommendations: recommendations
            .recipes
            .into_iter()
            .map(RecommendedRecipe::from)
            .collect(),
    }))
}
