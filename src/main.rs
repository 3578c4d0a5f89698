use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use replay_store::{api::create_router, application::builder::ApplicationBuilder, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting replay store");

    // Load configuration
    let config = Config::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    info!(
        storage_path = %config.storage_path.display(),
        max_upload_bytes = config.max_upload_bytes,
        "Configuration loaded and validated"
    );

    let listen_addr = config.listen_addr.clone();
    let audit_on_startup = config.audit_on_startup;
    let state = ApplicationBuilder::new(config)
        .with_index()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open upload index: {}", e))?
        .with_blob_store()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize blob store: {}", e))?
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build application: {}", e))?;

    if audit_on_startup {
        let report = state
            .audit_use_case
            .execute()
            .await
            .context("Index audit failed")?;
        if !report.is_consistent() {
            warn!(
                "{} of {} indexed replays have no blob and will report not found",
                report.missing_blobs.len(),
                report.indexed
            );
        }
    }

    let index = std::sync::Arc::clone(&state.index);
    let app = create_router(state);

    // Start server
    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing upload index");
    index.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
