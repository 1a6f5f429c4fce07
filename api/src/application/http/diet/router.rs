use super::handlers::create_diet_plan::{__path_create_diet_plan, create_diet_plan};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_diet_plan))]
pub struct DietApiDoc;

pub fn diet_routes(state: AppState) -> Router<AppState> {
    // Symptom text has no length cap.
    Router::new().route(
        &format!("{}/diet", state.args.server.root_path),
        post(create_diet_plan).layer(DefaultBodyLimit::disable()),
    )
}
