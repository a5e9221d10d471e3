use async_trait::async_trait;
use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointId, PointStruct, SearchPointsBuilder,
    UpsertPointsBuilder, VectorParamsBuilder, vectors_config,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::application::ports::{VectorDbError, VectorDbProvider, VectorRecord};
use crate::domain::{CollectionInfo, DistanceMethod, Embedding, RetrievedDocument};

pub struct QdrantProvider {
    url: String,
    distance_method: DistanceMethod,
    client: RwLock<Option<Arc<Qdrant>>>,
}

impl QdrantProvider {
    pub fn new(url: String, distance_method: DistanceMethod) -> Self {
        Self {
            url,
            distance_method,
            client: RwLock::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_distance_method(method: DistanceMethod) -> Distance {
        match method {
            DistanceMethod::Cosine => Distance::Cosine,
            DistanceMethod::Dot => Distance::Dot,
        }
    }

    async fn client(&self) -> Result<Arc<Qdrant>, VectorDbError> {
        self.client
            .read()
            .await
            .as_ref()
            .map(Arc::clone)
            .ok_or(VectorDbError::NotConnected)
    }

    fn to_point(record: VectorRecord) -> PointStruct {
        let mut payload: HashMap<String, serde_json::Value> = HashMap::new();
        payload.insert("text".to_string(), serde_json::Value::String(record.text));
        payload.insert(
            "metadata".to_string(),
            record.metadata.unwrap_or(serde_json::Value::Null),
        );

        let id = match record.record_id {
            Some(id) => PointId::from(id),
            None => PointId::from(Uuid::new_v4().to_string()),
        };

        PointStruct::new(id, record.vector.values, payload)
    }
}

#[async_trait]
impl VectorDbProvider for QdrantProvider {
    fn backend_name(&self) -> &'static str {
        "QDRANT"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn connect(&self) -> Result<(), VectorDbError> {
        let client = Qdrant::from_url(&self.url)
            .build()
            .map_err(|e| VectorDbError::ConnectionFailed(e.to_string()))?;

        client
            .health_check()
            .await
            .map_err(|e| VectorDbError::ConnectionFailed(e.to_string()))?;

        *self.client.write().await = Some(Arc::new(client));
        info!(url = %self.url, "Connected to Qdrant");
        Ok(())
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn disconnect(&self) -> Result<(), VectorDbError> {
        if self.client.write().await.take().is_some() {
            info!(url = %self.url, "Disconnected from Qdrant");
        }
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.client.read().await.is_some()
    }

    #[instrument(skip(self))]
    async fn is_collection_existed(&self, collection_name: &str) -> Result<bool, VectorDbError> {
        self.client()
            .await?
            .collection_exists(collection_name)
            .await
            .map_err(|e| VectorDbError::QueryFailed(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn list_all_collections(&self) -> Result<Vec<String>, VectorDbError> {
        let response = self
            .client()
            .await?
            .list_collections()
            .await
            .map_err(|e| VectorDbError::QueryFailed(e.to_string()))?;

        Ok(response
            .collections
            .into_iter()
            .map(|collection| collection.name)
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_collection_info(
        &self,
        collection_name: &str,
    ) -> Result<Option<CollectionInfo>, VectorDbError> {
        if !self.is_collection_existed(collection_name).await? {
            return Ok(None);
        }

        let response = self
            .client()
            .await?
            .collection_info(collection_name)
            .await
            .map_err(|e| VectorDbError::QueryFailed(e.to_string()))?;

        let Some(result) = response.result else {
            return Ok(None);
        };

        let vector_size = result
            .config
            .as_ref()
            .and_then(|config| config.params.as_ref())
            .and_then(|params| params.vectors_config.as_ref())
            .and_then(|vectors| match &vectors.config {
                Some(vectors_config::Config::Params(params)) => Some(params.size),
                _ => None,
            });

        Ok(Some(CollectionInfo {
            name: collection_name.to_string(),
            vector_size,
            record_count: result.points_count.unwrap_or(0),
        }))
    }

    #[instrument(skip(self))]
    async fn delete_collection(&self, collection_name: &str) -> Result<(), VectorDbError> {
        if !self.is_collection_existed(collection_name).await? {
            return Ok(());
        }

        self.client()
            .await?
            .delete_collection(collection_name)
            .await
            .map_err(|e| VectorDbError::CollectionDeletionFailed(e.to_string()))?;

        info!(collection = %collection_name, "collection_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_collection(
        &self,
        collection_name: &str,
        embedding_size: usize,
        do_reset: bool,
    ) -> Result<bool, VectorDbError> {
        if do_reset {
            self.delete_collection(collection_name).await?;
        }

        if self.is_collection_existed(collection_name).await? {
            return Ok(false);
        }

        self.client()
            .await?
            .create_collection(
                CreateCollectionBuilder::new(collection_name).vectors_config(
                    VectorParamsBuilder::new(
                        embedding_size as u64,
                        Self::map_distance_method(self.distance_method),
                    ),
                ),
            )
            .await
            .map_err(|e| VectorDbError::CollectionCreationFailed(e.to_string()))?;

        info!(collection = %collection_name, "collection_created");
        Ok(true)
    }

    #[instrument(skip(self, record))]
    async fn insert_one(
        &self,
        collection_name: &str,
        record: VectorRecord,
    ) -> Result<(), VectorDbError> {
        self.insert_many(collection_name, vec![record], 1).await
    }

    #[instrument(skip(self, records), fields(count = records.len()))]
    async fn insert_many(
        &self,
        collection_name: &str,
        records: Vec<VectorRecord>,
        batch_size: usize,
    ) -> Result<(), VectorDbError> {
        let client = self.client().await?;
        if !client
            .collection_exists(collection_name)
            .await
            .map_err(|e| VectorDbError::QueryFailed(e.to_string()))?
        {
            return Err(VectorDbError::CollectionNotFound(collection_name.to_string()));
        }

        let total = records.len();
        let mut points: Vec<PointStruct> = records.into_iter().map(Self::to_point).collect();

        while !points.is_empty() {
            let rest = points.split_off(batch_size.max(1).min(points.len()));
            client
                .upsert_points(UpsertPointsBuilder::new(collection_name, points).wait(true))
                .await
                .map_err(|e| VectorDbError::InsertFailed(e.to_string()))?;
            points = rest;
        }

        info!(collection = %collection_name, count = total, "points_upserted");
        Ok(())
    }

    #[instrument(skip(self, vector), fields(limit = limit))]
    async fn search_by_vector(
        &self,
        collection_name: &str,
        vector: &Embedding,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>, VectorDbError> {
        let response = self
            .client()
            .await?
            .search_points(
                SearchPointsBuilder::new(collection_name, vector.values.clone(), limit as u64)
                    .with_payload(true),
            )
            .await
            .map_err(|e| VectorDbError::SearchFailed(e.to_string()))?;

        Ok(response
            .result
            .into_iter()
            .filter_map(|point| {
                let text = point.payload.get("text")?.as_str()?.to_string();
                Some(RetrievedDocument {
                    text,
                    score: point.score,
                })
            })
            .collect())
    }
}
