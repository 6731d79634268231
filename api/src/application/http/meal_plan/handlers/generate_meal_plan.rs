use std::collections::{BTreeMap, HashMap};

use axum::{Json, extract::State};
use nutridish_core::domain::{
    meal_plan::{
        ports::MealPlanService,
        value_objects::{GenerateMealPlanInput, WeeklyMealPlan},
    },
    recipe::value_objects::MealSlot,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    tags::parse_dietary_tags,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateMealPlanRequest {
    pub user_id: Uuid,
    /// `{"<dietary label>": true}` restricts every slot of the plan.
    #[serde(default)]
    pub tags: HashMap<String, bool>,
}

/// One generated plan cell.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PlannedMealView {
    pub title: String,
    pub meal_slot: MealSlot,
    pub dietary: Vec<String>,
    pub ingredients: Vec<String>,
}

/// `{"Day 1": {"breakfast": {...}, ...}, ...}`
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WeeklyMealPlanResponse(pub BTreeMap<String, BTreeMap<String, PlannedMealView>>);

impl From<WeeklyMealPlan> for WeeklyMealPlanResponse {
    fn from(plan: WeeklyMealPlan) -> Self {
        let mut days = BTreeMap::new();

        for day in plan.days {
            let mut slots = BTreeMap::new();
            for meal in day.meals {
                slots.insert(
                    meal.meal_slot.as_str().to_string(),
                    PlannedMealView {
                        title: meal.title,
                        meal_slot: meal.meal_slot,
                        dietary: meal.dietary,
                        ingredients: meal.ingredients,
                    },
                );
            }
            days.insert(format!("Day {}", day.day_index), slots);
        }

        Self(days)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateMealPlanResponse {
    pub message: String,
    pub meal_plan: WeeklyMealPlanResponse,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal-plan",
    summary = "Generate weekly meal plan",
    description = "Generate a 7-day, 5-slot meal plan for a user, avoiding recipes used for the same slot within the cooldown window and honoring dietary tags",
    request_body = GenerateMealPlanRequest,
    responses(
        (status = 200, body = GenerateMealPlanResponse, description = "Meal plan generated"),
        (status = 400, description = "Unknown dietary tag"),
        (status = 404, description = "User not found")
    )
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    Json(request): Json<GenerateMealPlanRequest>,
) -> Result<Response<GenerateMealPlanResponse>, ApiError> {
    let tags = parse_dietary_tags(&request.tags)?;

    let plan = state
        .service
        .generate_weekly_plan(GenerateMealPlanInput {
            user_id: request.user_id,
            tags,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate meal plan: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GenerateMealPlanResponse {
        message: "Meal plan generated successfully".to_string(),
        meal_plan: WeeklyMealPlanResponse::from(plan),
    }))
}

#[cfg(test)]
mod tests {
    use nutridish_core::domain::meal_plan::value_objects::{DayPlan, PlannedMealSummary};

    use super::*;

    #[test]
    fn response_keys_days_and_slots() {
        let plan = WeeklyMealPlan {
            days: vec![
                DayPlan {
                    day_index: 1,
                    meals: vec![PlannedMealSummary {
                        title: "bubur ayam".to_string(),
                        meal_slot: MealSlot::Breakfast,
                        dietary: vec!["low fat".to_string()],
                        ingredients: vec!["chicken".to_string(), "rice".to_string()],
                    }],
                },
                DayPlan {
                    day_index: 2,
                    meals: Vec::new(),
                },
            ],
        };

        let response = WeeklyMealPlanResponse::from(plan);

        let day1 = response.0.get("Day 1").unwrap();
        assert_eq!(day1.get("breakfast").unwrap().title, "bubur ayam");
        assert!(response.0.get("Day 2").unwrap().is_empty());
    }
}
