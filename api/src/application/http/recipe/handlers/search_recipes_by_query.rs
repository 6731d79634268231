use axum::extract::{Query, State};
use nutridish_core::domain::recipe::{
    entities::Recipe,
    ports::RecipeService,
    value_objects::{MealSlotFlags, RecipeSearchFilter},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::{
    query_params::{PageQuery, Pagination},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchByQueryParams {
    #[serde(default)]
    pub query: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct QueryRecipeSummary {
    pub title: String,
    pub image: Option<String>,
    pub meal_slots: MealSlotFlags,
}

impl From<Recipe> for QueryRecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            image: recipe.image,
            meal_slots: recipe.meal_slots,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchByQueryResponse {
    pub items: Vec<QueryRecipeSummary>,
    pub page: u64,
    pub page_size: u64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "recipe",
    summary = "Search recipes by query",
    description = "Free-text search against title and ingredients, paginated",
    params(SearchByQueryParams),
    responses(
        (status = 200, body = SearchByQueryResponse)
    )
)]
pub async fn search_recipes_by_query(
    State(state): State<AppState>,
    Query(params): Query<SearchByQueryParams>,
) -> Result<Response<SearchByQueryResponse>, ApiError> {
    let pagination = Pagination::from(PageQuery {
        page: params.page,
        page_size: params.page_size,
    });

    let recipes = state
        .service
        .search_recipes(RecipeSearchFilter {
            query: params
                .query
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            dietary: Vec::new(),
            offset: pagination.offset(),
            limit: pagination.limit(),
        })
        .await
        .map_err(|e| {
            tracing::error!("Recipe search failed: {}", e);
            ApiError::from(e)
        })?;

    let items: Vec<QueryRecipeSummary> =
        recipes.into_iter().map(QueryRecipeSummary::from).collect();
    let count = items.len();

    Ok(Response::OK(SearchByQueryResponse {
        items,
        page: pagination.page,
        page_size: pagination.page_size,
        count,
    }))
}
