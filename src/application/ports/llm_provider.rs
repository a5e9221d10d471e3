use async_trait::async_trait;

use crate::domain::{ChatMessage, DocumentType, Embedding, MessageRole};

/// Generation and embedding capability shared by every LLM vendor.
///
/// Model selection happens once, right after construction and before the
/// client is published; after that the client is only used through `&self`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn backend_name(&self) -> &'static str;

    fn set_generation_model(&mut self, model_id: &str);

    fn set_embedding_model(&mut self, model_id: &str, embedding_size: usize);

    fn generation_model(&self) -> Option<&str>;

    fn embedding_model(&self) -> Option<&str>;

    fn embedding_size(&self) -> Option<usize>;

    async fn generate_text(
        &self,
        prompt: &str,
        chat_history: &[ChatMessage],
    ) -> Result<String, LlmProviderError>;

    async fn embed_text(
        &self,
        text: &str,
        document_type: DocumentType,
    ) -> Result<Embedding, LlmProviderError>;

    fn construct_prompt(&self, prompt: &str, role: MessageRole) -> ChatMessage {
        ChatMessage::new(role, prompt)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmProviderError {
    #[error("generation model is not set")]
    GenerationModelNotSet,
    #[error("embedding model is not set")]
    EmbeddingModelNotSet,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
