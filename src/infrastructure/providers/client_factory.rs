use crate::application::ports::{LlmProvider, VectorDbProvider};
use crate::domain::BackendIdentifier;
use crate::infrastructure::llm::LlmProviderFactory;
use crate::infrastructure::persistence::{DbClient, DbEngine, VectorDbProviderFactory};
use crate::presentation::config::Settings;

use super::ProviderFactoryError;

/// Everything the lifecycle needs to build its resources.
///
/// All methods are synchronous and must not perform I/O; connecting is the
/// lifecycle's job.
pub trait ClientFactory: Send + Sync {
    fn create_db_engine(&self, settings: &Settings) -> Result<DbEngine, sqlx::Error>;

    fn create_llm_client(
        &self,
        identifier: &BackendIdentifier,
        settings: &Settings,
    ) -> Result<Box<dyn LlmProvider>, ProviderFactoryError>;

    fn create_vectordb_client(
        &self,
        identifier: &BackendIdentifier,
        settings: &Settings,
        db_client: &DbClient,
    ) -> Result<Box<dyn VectorDbProvider>, ProviderFactoryError>;
}

/// Production factory backed by the registered vendor implementations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderRegistry;

impl ClientFactory for ProviderRegistry {
    fn create_db_engine(&self, settings: &Settings) -> Result<DbEngine, sqlx::Error> {
        DbEngine::connect_lazy(&settings.database_url(), settings.postgres_max_connections)
    }

    fn create_llm_client(
        &self,
        identifier: &BackendIdentifier,
        settings: &Settings,
    ) -> Result<Box<dyn LlmProvider>, ProviderFactoryError> {
        LlmProviderFactory::create(identifier, settings)
    }

    fn create_vectordb_client(
        &self,
        identifier: &BackendIdentifier,
        settings: &Settings,
        db_client: &DbClient,
    ) -> Result<Box<dyn VectorDbProvider>, ProviderFactoryError> {
        VectorDbProviderFactory::create(identifier, settings, db_client)
    }
}
