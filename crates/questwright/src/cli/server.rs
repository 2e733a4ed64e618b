//! HTTP service command handler.

use super::files::load_config;
use questwright::{OpenAiClient, QuestwrightResult, serve as serve_api};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Run the API until CTRL+C.
///
/// The API key is checked before the listener binds.
pub async fn serve(
    config: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> QuestwrightResult<()> {
    let mut config = load_config(config)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let client = OpenAiClient::new(config.provider.client_config()?);
    info!(
        base_url = %client.config().base_url(),
        standard = %config.models.standard().model(),
        detailed = %config.models.detailed().model(),
        "Starting Questwright API"
    );

    serve_api(&config, Arc::new(client)).await
}
