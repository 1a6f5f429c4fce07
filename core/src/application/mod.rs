use crate::{
    domain::{
        common::{DietConfig, entities::app_errors::CoreError, services::Service},
        diet::keywords::KeywordSet,
    },
    infrastructure::llm::GeminiLLMClient,
};

pub type DietPlanService = Service<GeminiLLMClient>;

pub fn create_service(config: DietConfig) -> Result<DietPlanService, CoreError> {
    let keyword_set = KeywordSet::medical()?;
    tracing::debug!("Loaded {} medical keywords", keyword_set.len());

    let llm_client = GeminiLLMClient::new(config.llm);

    Ok(Service::new(keyword_set, llm_client))
}
