//! Learning-path suggestions produced by a generative text backend.

mod gemini;
mod prompt;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::LlmSettings;
use crate::logging;

pub use gemini::GeminiClient;
use prompt::render_learning_path_prompt;

/// Shown whenever the backend cannot produce suggestions.
pub const FALLBACK_SUGGESTION: &str = "Unable to generate AI suggestions at this time.";

/// A backend that turns a fully rendered prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String>;
}

/// Session-facing seam: always yields something displayable.
#[async_trait]
pub trait SuggestionGenerator: Send + Sync {
    async fn generate(&self, topics: &[String]) -> String;
}

pub struct LearningPathAdvisor<T> {
    backend: T,
}

impl<T: TextGenerator> LearningPathAdvisor<T> {
    pub fn new(backend: T) -> Self {
        Self { backend }
    }
}

impl LearningPathAdvisor<GeminiClient> {
    /// Builds the Gemini-backed advisor. Client initialization runs with diagnostics silenced.
    pub fn gemini(settings: &LlmSettings) -> Result<Self> {
        let client = logging::silenced(|| GeminiClient::new(settings))?;
        tracing::debug!(model = client.model(), "Gemini client ready");
        Ok(Self::new(client))
    }
}

#[async_trait]
impl<T: TextGenerator> SuggestionGenerator for LearningPathAdvisor<T> {
    async fn generate(&self, topics: &[String]) -> String {
        let prompt = render_learning_path_prompt(topics);
        match self.backend.generate_content(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "Error generating AI suggestions");
                FALLBACK_SUGGESTION.to_string()
            }
        }
    }
}
