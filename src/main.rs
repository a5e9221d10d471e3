use anyhow::Context;
use tokio::net::TcpListener;

use mini_rag::infrastructure::observability::{TracingConfig, init_tracing};
use mini_rag::infrastructure::providers::ProviderRegistry;
use mini_rag::presentation::{Lifecycle, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::default())?;

    let settings = Settings::load().context("failed to load settings")?;
    let lifecycle = Lifecycle::new(settings, ProviderRegistry);

    lifecycle
        .run(|resources| async move {
            let address = resources.settings().server_address();
            let listener = TcpListener::bind(&address)
                .await
                .with_context(|| format!("failed to bind {}", address))?;
            tracing::info!(address = %address, "Listening");

            axum::serve(listener, create_router(resources))
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            Ok(())
        })
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
