use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::{
    entities::Recipe,
    value_objects::{DietaryTag, MealSlot},
};

/// Days in a generated plan and in the reuse cooldown window.
pub const PLAN_DAYS: i64 = 7;
pub const COOLDOWN_DAYS: i64 = 7;

/// How many tags a plan-cell summary shows.
pub const SUMMARY_DIETARY_LIMIT: usize = 2;
pub const SUMMARY_INGREDIENT_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct GenerateMealPlanInput {
    pub user_id: Uuid,
    pub tags: Vec<DietaryTag>,
}

/// Compact cell of a freshly generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlannedMealSummary {
    pub title: String,
    pub meal_slot: MealSlot,
    pub dietary: Vec<String>,
    pub ingredients: Vec<String>,
}

impl PlannedMealSummary {
    pub fn from_recipe(recipe: &Recipe, slot: MealSlot) -> Self {
        let mut dietary = recipe.dietary.labels();
        dietary.truncate(SUMMARY_DIETARY_LIMIT);

        let mut ingredients = recipe.contains.labels();
        ingredients.truncate(SUMMARY_INGREDIENT_LIMIT);

        Self {
            title: recipe.title.clone(),
            meal_slot: slot,
            dietary,
            ingredients,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    pub day_index: i16,
    pub meals: Vec<PlannedMealSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyMealPlan {
    pub days: Vec<DayPlan>,
}
