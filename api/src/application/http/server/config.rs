use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppConfigResponse {
    pub root_path: String,
    pub allowed_origins: Vec<String>,
}

/// Public runtime configuration, for frontends to discover the API shape.
pub async fn get_config(State(state): State<AppState>) -> Json<AppConfigResponse> {
    Json(AppConfigResponse {
        root_path: state.args.server.root_path.clone(),
        allowed_origins: state.args.server.allowed_origins.clone(),
    })
}
