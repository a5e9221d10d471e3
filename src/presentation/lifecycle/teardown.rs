use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{info, warn};

use crate::application::ports::VectorDbProvider;
use crate::infrastructure::persistence::DbEngine;
use crate::presentation::state::AppResources;

#[derive(Debug, thiserror::Error)]
#[error("failed to release {resource}: {reason}")]
pub struct TeardownError {
    pub resource: &'static str,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct TeardownReport {
    pub released: Vec<&'static str>,
    pub errors: Vec<TeardownError>,
}

impl TeardownReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Holds every resource that needs releasing.
///
/// `release` disposes the database engine and then disconnects the
/// vector-storage client, each step isolated from the other's failure.
/// A guard dropped without being released or disarmed spawns the release
/// onto the current runtime, so an abandoned startup or serving future
/// does not leak a connected client.
#[derive(Default)]
pub struct TeardownGuard {
    db_engine: Option<Arc<DbEngine>>,
    vectordb_client: Option<Arc<dyn VectorDbProvider>>,
}

impl TeardownGuard {
    pub fn for_resources(resources: &AppResources) -> Self {
        Self {
            db_engine: Some(Arc::clone(resources.db_engine())),
            vectordb_client: Some(Arc::clone(resources.vectordb_client())),
        }
    }

    pub fn track_db_engine(&mut self, db_engine: Arc<DbEngine>) {
        self.db_engine = Some(db_engine);
    }

    pub fn track_vectordb_client(&mut self, client: Arc<dyn VectorDbProvider>) {
        self.vectordb_client = Some(client);
    }

    pub fn is_empty(&self) -> bool {
        self.db_engine.is_none() && self.vectordb_client.is_none()
    }

    /// Hands ownership of the tracked resources to someone else.
    pub fn disarm(&mut self) {
        self.db_engine = None;
        self.vectordb_client = None;
    }

    pub async fn release(&mut self) -> TeardownReport {
        release(self.db_engine.take(), self.vectordb_client.take()).await
    }
}

impl Drop for TeardownGuard {
    fn drop(&mut self) {
        if self.is_empty() {
            return;
        }

        let db_engine = self.db_engine.take();
        let vectordb_client = self.vectordb_client.take();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                warn!("Resources abandoned before teardown, releasing in background");
                handle.spawn(release(db_engine, vectordb_client));
            }
            Err(_) => {
                warn!("Resources abandoned outside a runtime, teardown skipped");
            }
        }
    }
}

async fn release(
    db_engine: Option<Arc<DbEngine>>,
    vectordb_client: Option<Arc<dyn VectorDbProvider>>,
) -> TeardownReport {
    let mut report = TeardownReport::default();

    if let Some(engine) = db_engine {
        match AssertUnwindSafe(engine.dispose()).catch_unwind().await {
            Ok(()) => report.released.push("db_engine"),
            Err(_) => report.errors.push(TeardownError {
                resource: "db_engine",
                reason: "dispose panicked".to_string(),
            }),
        }
    }

    if let Some(client) = vectordb_client {
        match AssertUnwindSafe(client.disconnect()).catch_unwind().await {
            Ok(Ok(())) => report.released.push("vectordb_client"),
            Ok(Err(e)) => report.errors.push(TeardownError {
                resource: "vectordb_client",
                reason: e.to_string(),
            }),
            Err(_) => report.errors.push(TeardownError {
                resource: "vectordb_client",
                reason: "disconnect panicked".to_string(),
            }),
        }
    }

    for error in &report.errors {
        warn!(resource = error.resource, reason = %error.reason, "Teardown step failed");
    }
    info!(released = ?report.released, failed = report.errors.len(), "Resources cleaned up");

    report
}
