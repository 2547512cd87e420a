//! musebox-api - HTTP server binary for the musebox evaluation relay.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use musebox_api::{router, AppState};
use musebox_core::Error;
use musebox_notion::NotionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   RUST_LOG    - standard env filter (default: "musebox_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "musebox_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    info!(log_format = %log_format, "Logging initialized");

    // Get configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    // Missing Notion configuration fails closed rather than refusing to
    // boot: the endpoint stays up and reports the error on every request.
    let state = match NotionStore::from_env() {
        Ok(store) => {
            info!("Notion store configured");
            AppState::new(Arc::new(store))
        }
        Err(e) => {
            warn!(error = %e, "Notion configuration missing; serving fail-closed");
            let message = match e {
                Error::Config(msg) => msg,
                other => other.to_string(),
            };
            AppState::unconfigured(message)
        }
    };

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("musebox-api listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
