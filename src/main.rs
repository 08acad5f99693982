use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inbox_core::{InboxConfig, RequestService};

/// Main entry point for the smart inbox backend
///
/// Loads `.env`, resolves configuration once, loads the request list and serves the REST API.
///
/// # Environment Variables
/// - `INBOX_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `INBOX_FIXTURE_PATH`: JSON request list to serve instead of the bundled fixture
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, fixture loading, or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("inbox_run=info".parse()?)
                .add_directive("inbox_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = InboxConfig::from_env()?;
    if let Some(path) = cfg.fixture_path() {
        if !path.is_file() {
            anyhow::bail!("Request fixture does not exist: {}", path.display());
        }
    }

    tracing::info!("++ Starting inbox REST on {}", cfg.rest_addr());

    let request_service = RequestService::from_config(&cfg)?;
    api_rest::serve(cfg.rest_addr(), request_service).await
}
