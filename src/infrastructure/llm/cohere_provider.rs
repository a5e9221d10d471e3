use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::GenerationOptions;
use crate::application::ports::{LlmProvider, LlmProviderError};
use crate::domain::{ChatMessage, DocumentType, Embedding, MessageRole};
use crate::infrastructure::observability::sanitize_prompt;

pub const COHERE_DEFAULT_API_URL: &str = "https://api.cohere.ai/v1";

pub struct CohereProvider {
    client: Client,
    api_key: String,
    base_url: String,
    options: GenerationOptions,
    generation_model: Option<String>,
    embedding_model: Option<String>,
    embedding_size: Option<usize>,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    chat_history: Vec<WireMessage>,
    message: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    message: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    texts: Vec<String>,
    input_type: &'static str,
    embedding_types: Vec<&'static str>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: EmbedByType,
}

#[derive(Deserialize)]
struct EmbedByType {
    float: Vec<Vec<f32>>,
}

impl CohereProvider {
    pub fn new(api_key: String, base_url: Option<String>, options: GenerationOptions) -> Self {
        let base_url = base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| COHERE_DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            client: Client::new(),
            api_key,
            base_url,
            options,
            generation_model: None,
            embedding_model: None,
            embedding_size: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn wire_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::System => "SYSTEM",
            MessageRole::User => "USER",
            MessageRole::Assistant => "CHATBOT",
        }
    }

    fn input_type(document_type: DocumentType) -> &'static str {
        match document_type {
            DocumentType::Document => "search_document",
            DocumentType::Query => "search_query",
        }
    }

    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, LlmProviderError> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmProviderError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmProviderError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmProviderError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl LlmProvider for CohereProvider {
    fn backend_name(&self) -> &'static str {
        "COHERE"
    }

    fn set_generation_model(&mut self, model_id: &str) {
        self.generation_model = Some(model_id.to_string());
    }

    fn set_embedding_model(&mut self, model_id: &str, embedding_size: usize) {
        self.embedding_model = Some(model_id.to_string());
        self.embedding_size = Some(embedding_size);
    }

    fn generation_model(&self) -> Option<&str> {
        self.generation_model.as_deref()
    }

    fn embedding_model(&self) -> Option<&str> {
        self.embedding_model.as_deref()
    }

    fn embedding_size(&self) -> Option<usize> {
        self.embedding_size
    }

    #[instrument(skip_all, fields(backend = "COHERE", model = ?self.generation_model))]
    async fn generate_text(
        &self,
        prompt: &str,
        chat_history: &[ChatMessage],
    ) -> Result<String, LlmProviderError> {
        let model = self
            .generation_model
            .clone()
            .ok_or(LlmProviderError::GenerationModelNotSet)?;

        let message = self.options.process_text(prompt);
        tracing::debug!(prompt = %sanitize_prompt(&message), "Sending chat request");

        let request_body = ChatRequest {
            model,
            chat_history: chat_history
                .iter()
                .map(|m| WireMessage {
                    role: Self::wire_role(m.role),
                    message: m.content.clone(),
                })
                .collect(),
            message,
            max_tokens: self.options.max_output_tokens,
            temperature: self.options.temperature,
        };

        let response: ChatResponse = self
            .post("chat", &request_body)
            .await?
            .json()
            .await
            .map_err(|e| LlmProviderError::InvalidResponse(e.to_string()))?;

        Ok(response.text)
    }

    #[instrument(skip_all, fields(backend = "COHERE", model = ?self.embedding_model))]
    async fn embed_text(
        &self,
        text: &str,
        document_type: DocumentType,
    ) -> Result<Embedding, LlmProviderError> {
        let model = self
            .embedding_model
            .clone()
            .ok_or(LlmProviderError::EmbeddingModelNotSet)?;

        let request_body = EmbedRequest {
            model,
            texts: vec![self.options.process_text(text)],
            input_type: Self::input_type(document_type),
            embedding_types: vec!["float"],
        };

        let response: EmbedResponse = self
            .post("embed", &request_body)
            .await?
            .json()
            .await
            .map_err(|e| LlmProviderError::InvalidResponse(e.to_string()))?;

        response
            .embeddings
            .float
            .into_iter()
            .next()
            .map(Embedding::new)
            .ok_or_else(|| LlmProviderError::InvalidResponse("empty embeddings".to_string()))
    }

    fn construct_prompt(&self, prompt: &str, role: MessageRole) -> ChatMessage {
        ChatMessage::new(role, self.options.process_text(prompt))
    }
}
