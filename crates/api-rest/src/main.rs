//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the inbox REST API on its own.
//!
//! ## Intended use
//! Useful during development when you want the API without the workspace's `inbox-run` wrapper
//! (which also loads a `.env` file).

use inbox_core::{InboxConfig, RequestService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the inbox REST API server
///
/// # Environment Variables
/// - `INBOX_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `INBOX_FIXTURE_PATH`: JSON request list to serve instead of the bundled fixture
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the request fixture cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("inbox_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = InboxConfig::from_env()?;

    tracing::info!("-- Starting inbox REST API on {}", cfg.rest_addr());

    let request_service = RequestService::from_config(&cfg)?;
    api_rest::serve(cfg.rest_addr(), request_service).await
}
