use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use tournabot::config::{BotSettings, Config};
use tournabot::gateway::discord::DiscordGateway;
use tournabot::notify::dispatcher::{Dispatcher, DispatcherConfig};
use tournabot::server::app;
use tournabot::server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tournabot.toml"));
    let config = Config::load(&config_path)?;
    init_tracing(&config);

    let settings = BotSettings::resolve(&config).context("bot credentials are not configured")?;
    let gateway = DiscordGateway::connect(&settings)
        .await
        .context("failed to establish discord session")?;
    let dispatcher = Dispatcher::new(
        Arc::new(gateway),
        DispatcherConfig::from_settings(&settings),
    );

    let state = AppState {
        dispatcher,
        server_config: config.server.clone(),
    };
    let addr = app::bind_address(state.server_config.as_ref());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "notification api listening");
    axum::serve(listener, app::build_router(state)).await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let level = config
        .logging
        .as_ref()
        .and_then(|logging| logging.level.as_deref())
        .unwrap_or("info");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
