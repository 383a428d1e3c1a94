use std::net::SocketAddr;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use label_translator::config_manager::load_config;
use label_translator::routes::create_app;
use label_translator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("label_translator=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (config, loaded_from) = load_config()?;
    match loaded_from {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => warn!("No config file found, using defaults and environment overrides"),
    }

    let app_state = AppState::new(config.clone())?;
    let app = create_app(app_state);

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
