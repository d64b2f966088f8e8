use std::sync::Arc;
use tracing::instrument;

use crate::domain::{ports::LlmService, DomainError};

/// Relays tax questions to the configured LLM provider, verbatim, under a
/// fixed system preamble.
pub struct ConsultService {
    llm: Arc<dyn LlmService>,
    system_prompt: String,
}

impl ConsultService {
    pub fn new(llm: Arc<dyn LlmService>, system_prompt: impl Into<String>) -> Self {
        Self {
            llm,
            system_prompt: system_prompt.into(),
        }
    }

    #[instrument(skip(self, question), fields(len = question.len()))]
    pub async fn ask(&self, question: &str) -> Result<String, DomainError> {
        self.llm
            .complete_with_system(&self.system_prompt, question)
            .await
    }
}
