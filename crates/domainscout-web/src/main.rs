mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use anyhow::Context;
use domainscout_core::{
    ConfigLoader,
    CoreContext,
};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    domainscout_registrar_api::ensure_crypto_provider();

    domainscout_core::logging::init();

    tracing::info!("Starting DomainScout API server");

    let config = ConfigLoader::load_default().context("Failed to load config")?;
    let bind_addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind_addr))?;

    let core = CoreContext::from_config(config).context("Failed to initialize services")?;

    tracing::info!(
        registrars = core.registry.len(),
        enabled = core.registry.enabled_count(),
        ai_suggestions = core.suggestions.has_provider(),
        "Services ready"
    );

    core.start_background_tasks();

    let app = routes::app_router(AppState::new(core));

    tracing::info!("Listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
