use anyhow::Context;
use bcknd_client::ApiClient;
use bcknd_config::BackendConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    bcknd_logging::init();

    info!(
        service = "probe",
        version = env!("CARGO_PKG_VERSION"),
        "Starting backend probe"
    );

    // Load configuration: optional file, then BCKND_HOST / BCKND_PORT
    let config = match std::env::var("BCKND_CONFIG") {
        Ok(path) if !path.is_empty() => bcknd_config::load_config(&path)
            .with_context(|| format!("loading config from {path}"))?,
        _ => BackendConfig::from_env()?,
    };

    // Built once, then passed to everything that needs it
    let api = ApiClient::new(&config)?;

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    if let Err(e) = probe(&api, &path).await {
        error!(url = %api.url(&path), "Probe failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn probe(api: &ApiClient, path: &str) -> anyhow::Result<()> {
    let response = api.get(path).send().await?;
    info!(
        url = %response.url(),
        status = response.status().as_u16(),
        "Backend responded"
    );
    Ok(())
}
