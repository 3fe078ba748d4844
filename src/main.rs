use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zohorelay::cli::Cli;
use zohorelay::config::ZohoCredentials;
use zohorelay::routes::{router, AppState};
use zohorelay::zoho_api::ZohoClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zohorelay=info")),
        )
        .init();

    let cli = Cli::parse();
    let credentials = ZohoCredentials::from_env()?;

    let state = AppState {
        zoho: Arc::new(ZohoClient::new(credentials)),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server running on port {}", cli.port);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
