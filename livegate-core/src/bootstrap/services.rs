//! Service initialization and dependency injection

use std::sync::Arc;
use std::time::Duration;

use livegate_providers::{BaseUrls, LiveStreamClient};
use tracing::{info, warn};

use crate::{
    config::ProviderConfig,
    repository::InMemoryEventCatalog,
    service::{AppIdentity, LiveStreamService},
    Config,
};

/// Container for all initialized services
#[derive(Clone)]
pub struct Services {
    /// Live-stream resolution pipeline
    pub live_stream_service: Arc<LiveStreamService>,
}

/// Build the provider HTTP client from configuration
pub fn build_provider_client(config: &ProviderConfig) -> anyhow::Result<LiveStreamClient> {
    let base_urls =
        BaseUrls::new(config.base_url.clone()).with_overrides(config.base_url_overrides.clone());

    let mut client = LiveStreamClient::with_timeouts(
        base_urls,
        Duration::from_secs(config.connect_timeout_seconds),
        Duration::from_secs(config.timeout_seconds),
    )?;

    if let Some(api_key) = &config.api_key {
        client.set_api_key(api_key.clone());
    }

    Ok(client)
}

/// Load the event catalog named by the configuration
pub async fn load_catalog(config: &Config) -> anyhow::Result<InMemoryEventCatalog> {
    let Some(path) = &config.catalog.seed_path else {
        warn!("No catalog seed configured, every event will resolve as not found");
        return Ok(InMemoryEventCatalog::new());
    };

    let catalog = InMemoryEventCatalog::load_seed_file(path).await?;
    info!(
        path = %path,
        events = catalog.event_count(),
        live_streams = catalog.live_stream_count(),
        "Event catalog loaded"
    );
    Ok(catalog)
}

/// Initialize all core services
pub async fn init_services(config: &Config) -> anyhow::Result<Services> {
    info!("Initializing services...");

    let catalog = load_catalog(config).await?;
    let provider = build_provider_client(&config.provider)?;
    let identity = AppIdentity::from_config(config);

    info!(
        brand = %identity.brand(),
        jurisdiction = %config.deployment.jurisdiction,
        provider = %config.provider.base_url,
        "Live stream service initialized"
    );

    let live_stream_service = Arc::new(LiveStreamService::new(
        Arc::new(catalog),
        Arc::new(provider),
        identity,
        config.deployment.jurisdiction.clone(),
    ));

    Ok(Services { live_stream_service })
}
