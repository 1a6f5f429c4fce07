use axum::{Router, routing::get};
use utoipa::OpenApi;

pub const LIVENESS_MESSAGE: &str = "✅ Gemini Diet API is running.";

#[derive(OpenApi)]
#[openapi(paths(liveness))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness check",
    description = "Confirms the service is running. Plain text, no body parsing.",
    responses(
        (status = 200, body = String, content_type = "text/plain")
    )
)]
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

pub fn health_routes<S>(root_path: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(&format!("{}/", root_path), get(liveness))
}
