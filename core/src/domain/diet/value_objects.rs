pub const NO_SYMPTOMS_REPLY: &str = "No symptoms provided.";

pub const NOT_MEDICAL_REPLY: &str = "⚠️ Please tell me about your medical condition or symptoms. I am a medical chatbot trained to provide personalized diet plans.";

pub const GENERATION_FAILURE_PREFIX: &str = "Failed to get response from Gemini:";

/// Terminal outcome of a single recommendation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DietRecommendation {
    MissingSymptoms,
    NotMedical,
    /// Generated plan, or the in-band description of a generation failure.
    Plan(String),
}

impl DietRecommendation {
    pub fn reply(&self) -> &str {
        match self {
            DietRecommendation::MissingSymptoms => NO_SYMPTOMS_REPLY,
            DietRecommendation::NotMedical => NOT_MEDICAL_REPLY,
            DietRecommendation::Plan(plan) => plan,
        }
    }

    pub fn into_reply(self) -> String {
        match self {
            DietRecommendation::Plan(plan) => plan,
            other => other.reply().to_string(),
        }
    }
}
