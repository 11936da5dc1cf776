use std::{sync::Arc, time::Duration};

use bookdesk_api::{backend::HttpBackend, config::ApiConfig};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Client for the upstream booking backend
    let backend = HttpBackend::new(
        config.backend_url.clone(),
        Duration::from_secs(config.request_timeout),
    )?;

    // Start API server
    bookdesk_api::start_server(config, Arc::new(backend)).await?;

    Ok(())
}
