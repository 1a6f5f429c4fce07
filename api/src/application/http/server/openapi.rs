use crate::application::http::{diet::router::DietApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Diet Plan API",
        description = "Suggests a daily diet plan for reported symptoms"
    ),
    nest(
        (path = "/diet", api = DietApiDoc),
        (path = "/", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
