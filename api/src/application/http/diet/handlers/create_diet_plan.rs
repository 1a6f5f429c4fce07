use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use dietplan_core::domain::diet::{
    ports::DietService,
    value_objects::{DietRecommendation, NO_SYMPTOMS_REPLY},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    diet::validators::DietPlanRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietPlanResponse {
    /// Diet plan, guidance message, or an in-band generation failure.
    pub reply: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "diet",
    summary = "Get a diet plan for symptoms",
    description = "Suggests a daily diet plan for the reported symptoms. Text without a recognised medical term gets a guidance reply instead. Generation failures are reported in `reply` with status 200.",
    responses(
        (status = 200, body = DietPlanResponse),
        (status = 400, body = ApiErrorResponse, description = "No symptoms provided")
    ),
    request_body = DietPlanRequest
)]
pub async fn create_diet_plan(
    State(state): State<AppState>,
    payload: Result<Json<DietPlanRequest>, JsonRejection>,
) -> Result<Response<DietPlanResponse>, ApiError> {
    let symptoms = match payload {
        Ok(Json(request)) => request.symptoms.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!("Unreadable diet plan request body: {}", rejection);
            String::new()
        }
    };

    match state.service.recommend(&symptoms).await {
        DietRecommendation::MissingSymptoms => {
            Err(ApiError::BadRequest(NO_SYMPTOMS_REPLY.to_string()))
        }
        recommendation => Ok(Response::OK(DietPlanResponse {
            reply: recommendation.into_reply(),
        })),
    }
}
