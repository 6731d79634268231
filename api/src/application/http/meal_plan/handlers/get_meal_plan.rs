use std::collections::BTreeMap;

use axum::extract::{Path, State};
use chrono::NaiveDate;
use nutridish_core::domain::{
    meal_plan::{entities::PlannedMeal, ports::MealPlanService},
    recipe::{entities::Nutrition, value_objects::MealSlotFlags},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PlannedMealDetail {
    pub title: String,
    pub day_index: i16,
    pub date_used: NaiveDate,
    pub image: Option<String>,
    pub meal_slots: MealSlotFlags,
    pub nutrition: Nutrition,
    pub rating: f64,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub categories: Vec<String>,
    pub description: Option<String>,
    pub published_at: Option<NaiveDate>,
}

impl From<PlannedMeal> for PlannedMealDetail {
    fn from(meal: PlannedMeal) -> Self {
        Self {
            title: meal.recipe.title,
            day_index: meal.entry.day_index,
            date_used: meal.entry.used_on,
            image: meal.recipe.image,
            meal_slots: meal.recipe.meal_slots,
            nutrition: meal.recipe.nutrition,
            rating: meal.recipe.rating,
            ingredients: meal.recipe.ingredients,
            directions: meal.recipe.directions,
            categories: meal.recipe.categories,
            description: meal.recipe.description,
            published_at: meal.recipe.published_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetMealPlanResponse {
    pub user_id: Uuid,
    /// Entries grouped by meal slot.
    pub meal_plan: BTreeMap<String, Vec<PlannedMealDetail>>,
}

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "meal-plan",
    summary = "Get user meal plan",
    description = "Retrieve the stored meal plan entries for a user, grouped by meal slot",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = GetMealPlanResponse),
        (status = 404, description = "User or plan not found")
    )
)]
pub async fn get_meal_plan(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetMealPlanResponse>, ApiError> {
    let meals = state.service.get_user_plan(user_id).await.map_err(|e| {
        tracing::error!("Failed to load meal plan: {}", e);
        ApiError::from(e)
    })?;

    if meals.is_empty() {
        return Err(ApiError::NotFound(
            "no meal plan found for this user".to_string(),
        ));
    }

    let mut grouped: BTreeMap<String, Vec<PlannedMealDetail>> = BTreeMap::new();
    for meal in meals {
        grouped
            .entry(meal.entry.meal_slot.as_str().to_string())
            .or_default()
            .push(PlannedMealDetail::from(meal));
    }

    Ok(Response::OK(GetMealPlanResponse {
        user_id,
        meal_plan: grouped,
    }))
}
