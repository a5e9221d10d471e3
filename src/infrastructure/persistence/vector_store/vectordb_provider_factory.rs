use crate::application::ports::VectorDbProvider;
use crate::domain::{BackendIdentifier, VectorDbBackend};
use crate::infrastructure::providers::ProviderFactoryError;
use crate::infrastructure::persistence::DbClient;
use crate::presentation::config::Settings;

use super::{PgVectorProvider, QdrantProvider};

pub struct VectorDbProviderFactory;

impl VectorDbProviderFactory {
    /// Builds an unconnected client for the named backend. No I/O happens
    /// here; callers must `connect()` before use.
    pub fn create(
        identifier: &BackendIdentifier,
        settings: &Settings,
        db_client: &DbClient,
    ) -> Result<Box<dyn VectorDbProvider>, ProviderFactoryError> {
        let backend: VectorDbBackend = identifier
            .name
            .parse()
            .map_err(|_| ProviderFactoryError::unsupported(identifier))?;

        match backend {
            VectorDbBackend::Qdrant => {
                tracing::info!(url = %settings.vector_db_url, "Creating Qdrant provider");
                Ok(Box::new(QdrantProvider::new(
                    settings.vector_db_url.clone(),
                    settings.vector_db_distance_method,
                )))
            }
            VectorDbBackend::PgVector => {
                tracing::info!("Creating pgvector provider");
                Ok(Box::new(PgVectorProvider::new(
                    db_client.clone(),
                    settings.vector_db_distance_method,
                    settings.vector_db_pgvec_index_threshold,
                )))
            }
        }
    }
}
