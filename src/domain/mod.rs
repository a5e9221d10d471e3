mod backend;
mod chat_message;
mod collection_info;
mod distance_method;
mod document_type;
mod embedding;
mod message_role;
mod retrieved_document;

pub use backend::{BackendIdentifier, LlmBackend, ProviderDomain, VectorDbBackend};
pub use chat_message::ChatMessage;
pub use collection_info::CollectionInfo;
pub use distance_method::DistanceMethod;
pub use document_type::DocumentType;
pub use embedding::Embedding;
pub use message_role::MessageRole;
pub use retrieved_document::RetrievedDocument;
