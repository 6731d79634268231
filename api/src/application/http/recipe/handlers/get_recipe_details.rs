use axum::extract::{Path, State};
use chrono::NaiveDate;
use nutridish_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeDetailsResponse {
    pub title: String,
    pub description: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub sodium: f64,
    pub rating: f64,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub categories: Vec<String>,
    pub seasons: Vec<String>,
    pub published_at: Option<NaiveDate>,
}

impl From<Recipe> for RecipeDetailsResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            description: recipe.description,
            calories: recipe.nutrition.calories,
            protein: recipe.nutrition.protein,
            fat: recipe.nutrition.fat,
            sodium: recipe.nutrition.sodium,
            rating: recipe.rating,
            image: recipe.image,
            ingredients: recipe.ingredients,
            directions: recipe.directions,
            categories: recipe.categories,
            seasons: recipe.seasons.labels(),
            published_at: recipe.published_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{title}",
    tag = "recipe",
    summary = "Get recipe details",
    description = "Full recipe details by case-insensitive title",
    params(
        ("title" = String, Path, description = "Recipe title"),
    ),
    responses(
        (status = 200, body = RecipeDetailsResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe_details(
    Path(title): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<RecipeDetailsResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe_details(title.clone())
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("recipe '{title}' not found")))?;

    Ok(Response::OK(RecipeDetailsResponse::from(recipe)))
}
