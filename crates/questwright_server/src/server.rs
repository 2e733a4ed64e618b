//! Binding and running the HTTP service.

use crate::{AppState, QuestwrightConfig, create_router};
use questwright_error::{HttpError, QuestwrightResult};
use questwright_interface::CompletionDriver;
use std::sync::Arc;
use tracing::{info, instrument};

/// Serve the API until CTRL+C.
///
/// # Errors
///
/// Returns [`HttpError`] when the listener cannot bind or the server stops
/// abnormally.
#[instrument(skip_all, fields(addr = %config.server.bind_address(), provider = driver.provider_name()))]
pub async fn serve(config: &QuestwrightConfig, driver: Arc<dyn CompletionDriver>) -> QuestwrightResult<()> {
    let state = AppState::new(
        driver,
        config.models.clone(),
        config.generation.temperature,
        config.generation.max_scenes,
    );
    let router = create_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Questwright listening. Press CTRL+C to shutdown.");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for CTRL+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping gracefully...");
}
