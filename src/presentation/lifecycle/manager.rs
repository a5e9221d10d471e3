use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{error, info, instrument};

use super::{LifecycleError, TeardownGuard, TeardownReport};
use crate::application::ports::{LlmProvider, VectorDbProvider};
use crate::infrastructure::observability::install_metrics_recorder;
use crate::infrastructure::providers::ClientFactory;
use crate::infrastructure::templates::TemplateParser;
use crate::presentation::config::Settings;
use crate::presentation::state::AppResources;

/// Builds, connects and releases the process-wide clients.
pub struct Lifecycle<F: ClientFactory> {
    settings: Arc<Settings>,
    factory: F,
}

impl<F: ClientFactory> Lifecycle<F> {
    pub fn new(settings: Settings, factory: F) -> Self {
        Self {
            settings: Arc::new(settings),
            factory,
        }
    }

    /// Runs `serve` between startup and teardown.
    ///
    /// Teardown runs exactly once whether `serve` returns `Ok`, returns
    /// `Err` or panics; a panic is re-raised after teardown.
    pub async fn run<S, Fut, T>(&self, serve: S) -> Result<T, LifecycleError>
    where
        S: FnOnce(AppResources) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let resources = self.startup().await?;
        let mut guard = TeardownGuard::for_resources(&resources);

        let outcome = AssertUnwindSafe(serve(resources)).catch_unwind().await;

        info!("Shutting down");
        guard.release().await;

        match outcome {
            Ok(result) => result.map_err(LifecycleError::Serving),
            Err(panic) => {
                error!("Serving phase panicked");
                std::panic::resume_unwind(panic)
            }
        }
    }

    /// Builds and connects every client, then publishes the bundle.
    ///
    /// On failure everything acquired so far is released before the error
    /// is returned, and no bundle is produced.
    pub async fn startup(&self) -> Result<AppResources, LifecycleError> {
        let mut guard = TeardownGuard::default();

        match self.acquire(&mut guard).await {
            Ok(resources) => {
                guard.disarm();
                info!("Resources initialized successfully");
                Ok(resources)
            }
            Err(e) => {
                error!(error = %e, "Startup failed, releasing acquired resources");
                guard.release().await;
                Err(e)
            }
        }
    }

    /// Releases a published bundle. Failures are logged, never returned.
    pub async fn shutdown(&self, resources: AppResources) -> TeardownReport {
        TeardownGuard::for_resources(&resources).release().await
    }

    #[instrument(skip_all)]
    async fn acquire(&self, guard: &mut TeardownGuard) -> Result<AppResources, LifecycleError> {
        let settings = &self.settings;

        let db_engine = Arc::new(
            self.factory
                .create_db_engine(settings)
                .map_err(LifecycleError::Database)?,
        );
        guard.track_db_engine(Arc::clone(&db_engine));
        let db_client = db_engine.session_factory();

        let mut generation_client = self
            .factory
            .create_llm_client(&settings.generation_backend_id(), settings)?;
        generation_client.set_generation_model(&settings.generation_model_id);
        info!(
            backend = %settings.generation_backend,
            model = %settings.generation_model_id,
            "Generation client ready"
        );

        let mut embedding_client = self
            .factory
            .create_llm_client(&settings.embedding_backend_id(), settings)?;
        embedding_client
            .set_embedding_model(&settings.embedding_model_id, settings.embedding_model_size);
        info!(
            backend = %settings.embedding_backend,
            model = %settings.embedding_model_id,
            size = settings.embedding_model_size,
            "Embedding client ready"
        );

        let vectordb_client: Arc<dyn VectorDbProvider> = Arc::from(
            self.factory
                .create_vectordb_client(&settings.vector_db_backend_id(), settings, &db_client)?,
        );
        guard.track_vectordb_client(Arc::clone(&vectordb_client));
        vectordb_client
            .connect()
            .await
            .map_err(LifecycleError::Connection)?;
        info!(backend = %settings.vector_db_backend, "Vector database connected");

        let template_parser = TemplateParser::new(&settings.primary_lang, &settings.default_lang);

        let metrics = install_metrics_recorder().map_err(LifecycleError::Metrics)?;

        let generation_client: Arc<dyn LlmProvider> = Arc::from(generation_client);
        let embedding_client: Arc<dyn LlmProvider> = Arc::from(embedding_client);

        Ok(AppResources::new(
            Arc::clone(settings),
            db_engine,
            generation_client,
            embedding_client,
            vectordb_client,
            template_parser,
            metrics,
        ))
    }
}
