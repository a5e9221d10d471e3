use async_trait::async_trait;

use super::VectorDbError;
use crate::domain::{CollectionInfo, Embedding, RetrievedDocument};

/// A record handed to a vector store in a batch insert.
#[derive(Debug, Clone)]
pub struct VectorRecord {
    pub text: String,
    pub vector: Embedding,
    pub metadata: Option<serde_json::Value>,
    pub record_id: Option<u64>,
}

/// Vector-storage capability shared by every vector database vendor.
///
/// `connect` must complete before any other call; after `disconnect` the
/// client answers every call with [`VectorDbError::NotConnected`].
/// `disconnect` is idempotent and never fails on a client that was never
/// connected.
#[async_trait]
pub trait VectorDbProvider: Send + Sync {
    fn backend_name(&self) -> &'static str;

    async fn connect(&self) -> Result<(), VectorDbError>;

    async fn disconnect(&self) -> Result<(), VectorDbError>;

    async fn is_connected(&self) -> bool;

    async fn is_collection_existed(&self, collection_name: &str) -> Result<bool, VectorDbError>;

    async fn list_all_collections(&self) -> Result<Vec<String>, VectorDbError>;

    async fn get_collection_info(
        &self,
        collection_name: &str,
    ) -> Result<Option<CollectionInfo>, VectorDbError>;

    async fn delete_collection(&self, collection_name: &str) -> Result<(), VectorDbError>;

    /// Returns `true` when a new collection was created.
    async fn create_collection(
        &self,
        collection_name: &str,
        embedding_size: usize,
        do_reset: bool,
    ) -> Result<bool, VectorDbError>;

    async fn insert_one(
        &self,
        collection_name: &str,
        record: VectorRecord,
    ) -> Result<(), VectorDbError>;

    async fn insert_many(
        &self,
        collection_name: &str,
        records: Vec<VectorRecord>,
        batch_size: usize,
    ) -> Result<(), VectorDbError>;

    async fn search_by_vector(
        &self,
        collection_name: &str,
        vector: &Embedding,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>, VectorDbError>;
}
