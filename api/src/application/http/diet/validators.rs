use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DietPlanRequest {
    /// Free-text description of the user's symptoms.
    #[serde(default)]
    #[schema(example = "I have a fever and body ache")]
    pub symptoms: Option<String>,
}
