use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::GenerationOptions;
use crate::application::ports::{LlmProvider, LlmProviderError};
use crate::domain::{ChatMessage, DocumentType, Embedding, MessageRole};
use crate::infrastructure::observability::sanitize_prompt;

pub const OPENAI_DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Client for OpenAI and OpenAI-compatible chat/embedding APIs.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    options: GenerationOptions,
    generation_model: Option<String>,
    embedding_model: Option<String>,
    embedding_size: Option<usize>,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: WireMessage,
}

#[derive(Serialize)]
struct EmbeddingRequest {
    input: Vec<String>,
    model: String,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: Option<String>, options: GenerationOptions) -> Self {
        let base_url = base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| OPENAI_DEFAULT_API_URL.to_string())
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

    fn to_wire(message: &ChatMessage) -> WireMessage {
        WireMessage {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
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
            .header("Authorization", format!("Bearer {}", self.api_key))
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
impl LlmProvider for OpenAiProvider {
    fn backend_name(&self) -> &'static str {
        "OPENAI"
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

    #[instrument(skip_all, fields(backend = "OPENAI", model = ?self.generation_model))]
    async fn generate_text(
        &self,
        prompt: &str,
        chat_history: &[ChatMessage],
    ) -> Result<String, LlmProviderError> {
        let model = self
            .generation_model
            .clone()
            .ok_or(LlmProviderError::GenerationModelNotSet)?;

        let prompt = self.options.process_text(prompt);
        tracing::debug!(prompt = %sanitize_prompt(&prompt), "Sending chat completion request");

        let mut messages: Vec<WireMessage> = chat_history.iter().map(Self::to_wire).collect();
        messages.push(Self::to_wire(&ChatMessage::user(prompt)));

        let request_body = ChatCompletionRequest {
            model,
            messages,
            max_tokens: self.options.max_output_tokens,
            temperature: self.options.temperature,
        };

        let completion: ChatCompletionResponse = self
            .post("chat/completions", &request_body)
            .await?
            .json()
            .await
            .map_err(|e| LlmProviderError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmProviderError::InvalidResponse("empty choices".to_string()))
    }

    #[instrument(skip_all, fields(backend = "OPENAI", model = ?self.embedding_model))]
    async fn embed_text(
        &self,
        text: &str,
        _document_type: DocumentType,
    ) -> Result<Embedding, LlmProviderError> {
        let model = self
            .embedding_model
            .clone()
            .ok_or(LlmProviderError::EmbeddingModelNotSet)?;

        let request_body = EmbeddingRequest {
            input: vec![self.options.process_text(text)],
            model,
        };

        let embedding_response: EmbeddingResponse = self
            .post("embeddings", &request_body)
            .await?
            .json()
            .await
            .map_err(|e| LlmProviderError::InvalidResponse(e.to_string()))?;

        embedding_response
            .data
            .into_iter()
            .next()
            .map(|d| Embedding::new(d.embedding))
            .ok_or_else(|| LlmProviderError::InvalidResponse("empty response".to_string()))
    }

    fn construct_prompt(&self, prompt: &str, role: MessageRole) -> ChatMessage {
        ChatMessage::new(role, self.options.process_text(prompt))
    }
}
