use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sqlx::types::Json;
use tracing::{info, instrument};

use crate::application::ports::{VectorDbError, VectorDbProvider, VectorRecord};
use crate::domain::{CollectionInfo, DistanceMethod, Embedding, RetrievedDocument};
use crate::infrastructure::persistence::DbClient;

const TABLE_PREFIX: &str = "pgvector_";

/// Vector store backed by the `vector` extension on the main database.
///
/// Each collection is a table named `pgvector_<collection>`. The pool is
/// borrowed from the database engine, so disconnecting only stops this
/// client from being used.
pub struct PgVectorProvider {
    db_client: DbClient,
    distance_method: DistanceMethod,
    index_threshold: u64,
    connected: AtomicBool,
}

impl PgVectorProvider {
    pub fn new(db_client: DbClient, distance_method: DistanceMethod, index_threshold: u64) -> Self {
        Self {
            db_client,
            distance_method,
            index_threshold,
            connected: AtomicBool::new(false),
        }
    }

    /// Maps a collection name to its table. Only lowercase ASCII letters,
    /// digits and `_` are accepted, so distinct names never share a table.
    pub fn table_name(collection_name: &str) -> Result<String, VectorDbError> {
        let valid = !collection_name.is_empty()
            && collection_name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !valid {
            return Err(VectorDbError::InvalidCollectionName(
                collection_name.to_string(),
            ));
        }

        Ok(format!("{}{}", TABLE_PREFIX, collection_name))
    }

    fn ensure_connected(&self) -> Result<(), VectorDbError> {
        if self.connected.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(VectorDbError::NotConnected)
        }
    }

    fn distance_operator(&self) -> &'static str {
        match self.distance_method {
            DistanceMethod::Cosine => "<=>",
            DistanceMethod::Dot => "<#>",
        }
    }

    fn index_ops(&self) -> &'static str {
        match self.distance_method {
            DistanceMethod::Cosine => "vector_cosine_ops",
            DistanceMethod::Dot => "vector_ip_ops",
        }
    }

    fn score_expression(&self) -> &'static str {
        match self.distance_method {
            DistanceMethod::Cosine => "1 - (vector <=> $1::vector)",
            DistanceMethod::Dot => "(vector <#> $1::vector) * -1",
        }
    }

    async fn table_exists(&self, table: &str) -> Result<bool, VectorDbError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM pg_tables WHERE tablename = $1)",
        )
        .bind(table)
        .fetch_one(self.db_client.pool())
        .await
        .map_err(|e| VectorDbError::QueryFailed(e.to_string()))
    }

    async fn record_count(&self, table: &str) -> Result<u64, VectorDbError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| VectorDbError::QueryFailed(e.to_string()))?;
        Ok(count.max(0) as u64)
    }

    #[instrument(skip(self))]
    async fn ensure_vector_index(&self, table: &str) -> Result<(), VectorDbError> {
        if self.record_count(table).await? < self.index_threshold {
            return Ok(());
        }

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS {table}_vector_idx ON {table} USING hnsw (vector {ops})",
            table = table,
            ops = self.index_ops()
        ))
        .execute(self.db_client.pool())
        .await
        .map_err(|e| VectorDbError::QueryFailed(e.to_string()))?;

        info!(table = %table, "vector_index_ensured");
        Ok(())
    }
}

#[async_trait]
impl VectorDbProvider for PgVectorProvider {
    fn backend_name(&self) -> &'static str {
        "PGVECTOR"
    }

    #[instrument(skip(self))]
    async fn connect(&self) -> Result<(), VectorDbError> {
        sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
            .execute(self.db_client.pool())
            .await
            .map_err(|e| VectorDbError::ConnectionFailed(e.to_string()))?;

        self.connected.store(true, Ordering::Release);
        info!("pgvector extension ready");
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), VectorDbError> {
        if self.connected.swap(false, Ordering::AcqRel) {
            info!("pgvector client disconnected");
        }
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    async fn is_collection_existed(&self, collection_name: &str) -> Result<bool, VectorDbError> {
        self.ensure_connected()?;
        let table = Self::table_name(collection_name)?;
        self.table_exists(&table).await
    }

    async fn list_all_collections(&self) -> Result<Vec<String>, VectorDbError> {
        self.ensure_connected()?;
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT tablename::text FROM pg_tables WHERE tablename LIKE 'pgvector\\_%' ORDER BY tablename",
        )
        .fetch_all(self.db_client.pool())
        .await
        .map_err(|e| VectorDbError::QueryFailed(e.to_string()))?;

        Ok(tables
            .into_iter()
            .filter_map(|t| t.strip_prefix(TABLE_PREFIX).map(str::to_string))
            .collect())
    }

    async fn get_collection_info(
        &self,
        collection_name: &str,
    ) -> Result<Option<CollectionInfo>, VectorDbError> {
        self.ensure_connected()?;
        let table = Self::table_name(collection_name)?;
        if !self.table_exists(&table).await? {
            return Ok(None);
        }

        let dimensions: Option<i32> = sqlx::query_scalar(
            "SELECT atttypmod FROM pg_attribute WHERE attrelid = $1::regclass AND attname = 'vector'",
        )
        .bind(&table)
        .fetch_optional(self.db_client.pool())
        .await
        .map_err(|e| VectorDbError::QueryFailed(e.to_string()))?;

        Ok(Some(CollectionInfo {
            name: collection_name.to_string(),
            vector_size: dimensions.filter(|d| *d > 0).map(|d| d as u64),
            record_count: self.record_count(&table).await?,
        }))
    }

    #[instrument(skip(self))]
    async fn delete_collection(&self, collection_name: &str) -> Result<(), VectorDbError> {
        self.ensure_connected()?;
        let table = Self::table_name(collection_name)?;

        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(self.db_client.pool())
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
        self.ensure_connected()?;
        let table = Self::table_name(collection_name)?;

        if do_reset {
            self.delete_collection(collection_name).await?;
        }

        if self.table_exists(&table).await? {
            return Ok(false);
        }

        sqlx::query(&format!(
            "CREATE TABLE {} (
                id BIGSERIAL PRIMARY KEY,
                text TEXT NOT NULL,
                vector vector({}) NOT NULL,
                metadata JSONB NOT NULL DEFAULT '{{}}',
                record_id BIGINT
            )",
            table, embedding_size
        ))
        .execute(self.db_client.pool())
        .await
        .map_err(|e| VectorDbError::CollectionCreationFailed(e.to_string()))?;

        info!(collection = %collection_name, "collection_created");
        Ok(true)
    }

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
        self.ensure_connected()?;
        let table = Self::table_name(collection_name)?;
        if !self.table_exists(&table).await? {
            return Err(VectorDbError::CollectionNotFound(collection_name.to_string()));
        }

        let statement = format!(
            "INSERT INTO {} (text, vector, metadata, record_id) VALUES ($1, $2::vector, $3, $4)",
            table
        );

        for batch in records.chunks(batch_size.max(1)) {
            let mut tx = self
                .db_client
                .begin()
                .await
                .map_err(|e| VectorDbError::InsertFailed(e.to_string()))?;

            for record in batch {
                sqlx::query(&statement)
                    .bind(&record.text)
                    .bind(record.vector.to_pgvector_literal())
                    .bind(Json(
                        record
                            .metadata
                            .clone()
                            .unwrap_or_else(|| serde_json::json!({})),
                    ))
                    .bind(record.record_id.map(|id| id as i64))
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| VectorDbError::InsertFailed(e.to_string()))?;
            }

            tx.commit()
                .await
                .map_err(|e| VectorDbError::InsertFailed(e.to_string()))?;
        }

        info!(collection = %collection_name, count = records.len(), "records_inserted");
        self.ensure_vector_index(&table).await
    }

    #[instrument(skip(self, vector), fields(limit = limit))]
    async fn search_by_vector(
        &self,
        collection_name: &str,
        vector: &Embedding,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>, VectorDbError> {
        self.ensure_connected()?;
        let table = Self::table_name(collection_name)?;

        let rows: Vec<(String, f64)> = sqlx::query_as(&format!(
            "SELECT text, ({score})::float8 AS score FROM {table} ORDER BY vector {op} $1::vector LIMIT $2",
            score = self.score_expression(),
            table = table,
            op = self.distance_operator()
        ))
        .bind(vector.to_pgvector_literal())
        .bind(limit as i64)
        .fetch_all(self.db_client.pool())
        .await
        .map_err(|e| VectorDbError::SearchFailed(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(text, score)| RetrievedDocument {
                text,
                score: score as f32,
            })
            .collect())
    }
}
