mod llm_provider;
mod vector_db_error;
mod vector_db_provider;

pub use llm_provider::{LlmProvider, LlmProviderError};
pub use vector_db_error::VectorDbError;
pub use vector_db_provider::{VectorDbProvider, VectorRecord};
