use std::sync::Arc;

use crate::domain::diet::{keywords::KeywordSet, ports::LLMClient};

/// Application service wiring the relevance gate to a generation backend.
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) keyword_set: Arc<KeywordSet>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(keyword_set: KeywordSet, llm_client: LLM) -> Self {
        Self {
            keyword_set: Arc::new(keyword_set),
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            keyword_set: Arc::clone(&self.keyword_set),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
