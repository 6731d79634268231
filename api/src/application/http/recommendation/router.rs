use super::handlers::daily_recommendations::{
    __path_daily_recommendations, daily_recommendations,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(daily_recommendations))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/daily-recommendations", state.args.server.root_path),
        post(daily_recommendations),
    )
}
