#[derive(Debug, thiserror::Error)]
pub enum VectorDbError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("client is not connected")]
    NotConnected,
    #[error("disconnect failed: {0}")]
    DisconnectFailed(String),
    #[error("invalid collection name: {0}")]
    InvalidCollectionName(String),
    #[error("collection not found: {0}")]
    CollectionNotFound(String),
    #[error("collection creation failed: {0}")]
    CollectionCreationFailed(String),
    #[error("collection deletion failed: {0}")]
    CollectionDeletionFailed(String),
    #[error("insert failed: {0}")]
    InsertFailed(String),
    #[error("search failed: {0}")]
    SearchFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
