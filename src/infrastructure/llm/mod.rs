mod cohere_provider;
mod generation_options;
mod llm_provider_factory;
mod openai_provider;

pub use cohere_provider::{COHERE_DEFAULT_API_URL, CohereProvider};
pub use generation_options::GenerationOptions;
pub use llm_provider_factory::LlmProviderFactory;
pub use openai_provider::{OPENAI_DEFAULT_API_URL, OpenAiProvider};
