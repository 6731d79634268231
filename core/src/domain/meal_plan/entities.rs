use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, recipe::entities::Recipe,
    recipe::value_objects::MealSlot};

/// One persisted pick: a recipe assigned to a (user, day, slot) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub recipe_title: String,
    pub meal_slot: MealSlot,
    pub day_index: i16,
    pub used_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MealPlanEntryConfig {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub recipe_title: String,
    pub meal_slot: MealSlot,
    pub day_index: i16,
    pub used_on: NaiveDate,
}

impl MealPlanEntry {
    pub fn new(config: MealPlanEntryConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            recipe_id: config.recipe_id,
            recipe_title: config.recipe_title,
            meal_slot: config.meal_slot,
            day_index: config.day_index,
            used_on: config.used_on,
            created_at: now,
        }
    }
}

/// A plan entry joined back to its recipe, as returned on retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlannedMeal {
    pub entry: MealPlanEntry,
    pub recipe: Recipe,
}
