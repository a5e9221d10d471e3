use crate::application::ports::LlmProvider;
use crate::domain::{BackendIdentifier, LlmBackend};
use crate::infrastructure::providers::ProviderFactoryError;
use crate::presentation::config::Settings;

use super::{CohereProvider, GenerationOptions, OpenAiProvider};

pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Builds an unconnected, unconfigured client for the named backend.
    pub fn create(
        identifier: &BackendIdentifier,
        settings: &Settings,
    ) -> Result<Box<dyn LlmProvider>, ProviderFactoryError> {
        let backend: LlmBackend = identifier
            .name
            .parse()
            .map_err(|_| ProviderFactoryError::unsupported(identifier))?;
        let options = GenerationOptions::from_settings(settings);

        match backend {
            LlmBackend::OpenAi => {
                let key = settings
                    .openai_api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or(ProviderFactoryError::MissingSetting("OPENAI_API_KEY"))?;
                tracing::info!(backend = %identifier, "Creating OpenAI provider");
                Ok(Box::new(OpenAiProvider::new(
                    key,
                    settings.openai_api_url.clone(),
                    options,
                )))
            }
            LlmBackend::Cohere => {
                let key = settings
                    .cohere_api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or(ProviderFactoryError::MissingSetting("COHERE_API_KEY"))?;
                tracing::info!(backend = %identifier, "Creating Cohere provider");
                Ok(Box::new(CohereProvider::new(
                    key,
                    settings.cohere_api_url.clone(),
                    options,
                )))
            }
        }
    }
}
