use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::value_objects::{
    DietaryFlags, IngredientFlags, MealSlotFlags, SeasonFlags,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub sodium: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub nutrition: Nutrition,
    pub rating: f64,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub categories: Vec<String>,
    pub published_at: Option<NaiveDate>,
    pub meal_slots: MealSlotFlags,
    pub dietary: DietaryFlags,
    pub seasons: SeasonFlags,
    pub contains: IngredientFlags,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
