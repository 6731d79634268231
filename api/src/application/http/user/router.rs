use super::handlers::{
    get_user::{__path_get_user, get_user},
    update_user::{__path_update_user, update_user},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_user, update_user))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/users/{{user_id}}", state.args.server.root_path),
        get(get_user).put(update_user),
    )
}
