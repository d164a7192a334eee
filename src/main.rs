use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_frontend::config::{load_config, FrontendConfig};
use game_frontend::lobby::lobby_handlers;
use game_frontend::pages::{BasePageConfig, PageContext, PageTemplates};
use game_frontend::routing::RouteComposer;
use game_frontend::translations::default_translation;
use game_frontend::{FrontendServer, Shutdown};

/// Web frontend for the game server.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path to the TOML config file. Defaults are used when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => FrontendConfig::default(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("game_frontend={},tower_http=info", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "game frontend starting");

    let templates = PageTemplates::load()?;
    let base = Arc::new(BasePageConfig::from_config(&config));

    tracing::info!(
        root_path = %base.root_path,
        cache_bust = %base.cache_bust,
        mounts = config.serve_directories.len(),
        "configuration loaded"
    );

    let pages = Arc::new(PageContext::new(
        templates,
        Arc::clone(&base),
        default_translation(),
        "en",
    ));
    let composer = RouteComposer::new(&config, base, lobby_handlers(pages));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = FrontendServer::new(config, composer);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
