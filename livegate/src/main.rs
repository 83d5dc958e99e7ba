mod server;

use anyhow::Result;
use tracing::info;

use livegate_core::{
    bootstrap::{init_services, load_config},
    logging,
};

use server::LivegateServer;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load and validate configuration
    let config = load_config()?;

    // 2. Initialize logging
    logging::init_logging(&config.logging)?;
    info!("Livegate server starting...");
    info!("HTTP address: {}", config.http_address());

    // 3. Catalog, provider client and resolution pipeline
    let services = init_services(&config).await?;

    // 4. Serve until Ctrl+C or SIGTERM
    LivegateServer::new(config, services).run().await?;

    info!("Livegate server stopped");
    Ok(())
}
