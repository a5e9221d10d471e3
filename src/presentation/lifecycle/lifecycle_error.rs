use metrics_exporter_prometheus::BuildError;

use crate::application::ports::VectorDbError;
use crate::infrastructure::providers::ProviderFactoryError;
use crate::presentation::config::ConfigurationError;

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("backend selection failed: {0}")]
    Backend(#[from] ProviderFactoryError),
    #[error("database engine could not be created: {0}")]
    Database(#[source] sqlx::Error),
    #[error("vector database connection failed: {0}")]
    Connection(#[source] VectorDbError),
    #[error("metrics recorder could not be installed: {0}")]
    Metrics(#[source] BuildError),
    #[error(transparent)]
    Serving(#[from] anyhow::Error),
}
