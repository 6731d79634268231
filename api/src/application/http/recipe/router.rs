use super::handlers::{
    get_recipe_details::{__path_get_recipe_details, get_recipe_details},
    search_recipes::{__path_search_recipes, search_recipes},
    search_recipes_by_query::{__path_search_recipes_by_query, search_recipes_by_query},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes, search_recipes_by_query, get_recipe_details))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/search", state.args.server.root_path),
            post(search_recipes).get(search_recipes_by_query),
        )
        .route(
            &format!("{}/recipes/{{title}}", state.args.server.root_path),
            get(get_recipe_details),
        )
}
