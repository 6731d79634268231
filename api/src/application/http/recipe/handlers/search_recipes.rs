use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use nutridish_core::domain::recipe::{
    entities::Recipe,
    ports::RecipeService,
    value_objects::{MealSlotFlags, RecipeSearchFilter},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_params::{PageQuery, Pagination},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    tags::parse_dietary_tags,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchRecipesRequest {
    /// Matched case-insensitively against title and ingredients.
    #[serde(default)]
    pub query: Option<String>,

    /// `{"<dietary label>": true}`; all truthy filters must match.
    #[serde(default)]
    pub filters: HashMap<String, bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeSummary {
    pub title: String,
    pub image: Option<String>,
    pub meal_slots: MealSlotFlags,
    pub dietary: Vec<String>,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            image: recipe.image,
            meal_slots: recipe.meal_slots,
            dietary: recipe.dietary.labels(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchRecipesResponse {
    pub items: Vec<RecipeSummary>,
    pub page: u64,
    pub page_size: u64,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "recipe",
    summary = "Search recipes",
    description = "Search recipes by free-text query and dietary filters, paginated",
    params(PageQuery),
    request_body = SearchRecipesRequest,
    responses(
        (status = 200, body = SearchRecipesResponse),
        (status = 400, description = "Unknown dietary tag")
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(page_query): Query<PageQuery>,
    Json(request): Json<SearchRecipesRequest>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let dietary = parse_dietary_tags(&request.filters)?;
    let pagination = Pagination::from(page_query);

    let recipes = state
        .service
        .search_recipes(RecipeSearchFilter {
            query: request
                .query
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            dietary,
            offset: pagination.offset(),
            limit: pagination.limit(),
        })
        .await
        .map_err(|e| {
            tracing::error!("Recipe search failed: {}", e);
            ApiError::from(e)
        })?;

    let items: Vec<RecipeSummary> = recipes.into_iter().map(RecipeSummary::from).collect();
    let count = items.len();

    Ok(Response::OK(SearchRecipesResponse {
        items,
        page: pagination.page,
        page_size: pagination.page_size,
        count,
    }))
}
