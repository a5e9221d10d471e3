use std::sync::Arc;

use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::ports::{LlmProvider, VectorDbProvider};
use crate::infrastructure::persistence::{DbClient, DbEngine};
use crate::infrastructure::templates::TemplateParser;
use crate::presentation::config::Settings;

/// The published bundle: every shared client a request handler may use.
///
/// Built once, after every resource is constructed and connected, and
/// read-only afterwards. Cloning shares the same clients.
#[derive(Clone)]
pub struct AppResources {
    settings: Arc<Settings>,
    db_engine: Arc<DbEngine>,
    db_client: DbClient,
    generation_client: Arc<dyn LlmProvider>,
    embedding_client: Arc<dyn LlmProvider>,
    vectordb_client: Arc<dyn VectorDbProvider>,
    template_parser: Arc<TemplateParser>,
    metrics: PrometheusHandle,
    started_at: DateTime<Utc>,
}

impl AppResources {
    pub const KEYS: [&'static str; 6] = [
        "generation_client",
        "embedding_client",
        "vectordb_client",
        "template_parser",
        "db_engine",
        "db_client",
    ];

    pub fn new(
        settings: Arc<Settings>,
        db_engine: Arc<DbEngine>,
        generation_client: Arc<dyn LlmProvider>,
        embedding_client: Arc<dyn LlmProvider>,
        vectordb_client: Arc<dyn VectorDbProvider>,
        template_parser: TemplateParser,
        metrics: PrometheusHandle,
    ) -> Self {
        let db_client = db_engine.session_factory();
        Self {
            settings,
            db_engine,
            db_client,
            generation_client,
            embedding_client,
            vectordb_client,
            template_parser: Arc::new(template_parser),
            metrics,
            started_at: Utc::now(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn db_engine(&self) -> &Arc<DbEngine> {
        &self.db_engine
    }

    pub fn db_client(&self) -> &DbClient {
        &self.db_client
    }

    pub fn generation_client(&self) -> &Arc<dyn LlmProvider> {
        &self.generation_client
    }

    pub fn embedding_client(&self) -> &Arc<dyn LlmProvider> {
        &self.embedding_client
    }

    pub fn vectordb_client(&self) -> &Arc<dyn VectorDbProvider> {
        &self.vectordb_client
    }

    pub fn template_parser(&self) -> &TemplateParser {
        &self.template_parser
    }

    pub fn metrics(&self) -> &PrometheusHandle {
        &self.metrics
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
