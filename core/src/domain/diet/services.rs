use crate::domain::{
    common::services::Service,
    diet::{
        ports::{DietService, LLMClient},
        prompt::build_diet_prompt,
        value_objects::{DietRecommendation, GENERATION_FAILURE_PREFIX},
    },
};

impl<LLM> DietService for Service<LLM>
where
    LLM: LLMClient,
{
    fn is_medical_related(&self, text: &str) -> bool {
        match self.keyword_set.matched_keyword(text) {
            Some(keyword) => {
                tracing::debug!(keyword, "Symptom text matched medical keyword");
                true
            }
            None => false,
        }
    }

    async fn get_diet_plan(&self, symptoms: &str) -> String {
        let prompt = build_diet_prompt(symptoms);

        match self.llm_client.generate(prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!("Diet plan generation failed: {}", e);
                format!("{} {}", GENERATION_FAILURE_PREFIX, e)
            }
        }
    }

    async fn recommend(&self, symptoms: &str) -> DietRecommendation {
        if symptoms.is_empty() {
            return DietRecommendation::MissingSymptoms;
        }

        if !self.is_medical_related(symptoms) {
            tracing::debug!("Symptom text rejected as not medical");
            return DietRecommendation::NotMedical;
        }

        DietRecommendation::Plan(self.get_diet_plan(symptoms).await)
    }
}
