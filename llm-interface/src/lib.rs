mod gemini;
mod prompt;

pub use gemini::GeminiProvider;
pub use prompt::build_persona_prompt;

use personagen_core::PersonaError;

/// Opaque text-in/text-out boundary to a hosted LLM.
pub trait SummaryProvider {
    async fn request_summary(&self, prompt: &str) -> Result<String, PersonaError>;
}
