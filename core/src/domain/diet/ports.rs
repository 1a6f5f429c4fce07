use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, diet::value_objects::DietRecommendation,
};

/// LLM Client trait for calling a text generation model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for diet recommendation business logic
pub trait DietService: Send + Sync {
    /// Whether `text` mentions at least one recognised symptom or condition.
    fn is_medical_related(&self, text: &str) -> bool;

    /// Never fails: upstream errors are folded into the returned text.
    fn get_diet_plan(&self, symptoms: &str) -> impl Future<Output = String> + Send;

    fn recommend(&self, symptoms: &str) -> impl Future<Output = DietRecommendation> + Send;
}
