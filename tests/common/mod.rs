//! Shared utilities for integration testing.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::broadcast;

use game_frontend::config::FrontendConfig;
use game_frontend::lobby::lobby_handlers;
use game_frontend::pages::{BasePageConfig, PageContext, PageTemplates};
use game_frontend::routing::RouteComposer;
use game_frontend::translations::default_translation;
use game_frontend::FrontendServer;

/// Build a config serving the given (prefix, directory) mounts.
pub fn config_with_mounts(root_path: &str, mounts: &[(&str, &str)]) -> FrontendConfig {
    let mut config = FrontendConfig::default();
    config.root_path = root_path.to_string();
    config.serve_directories = mounts
        .iter()
        .map(|(prefix, dir)| (prefix.to_string(), dir.to_string()))
        .collect::<HashMap<_, _>>();
    config
}

/// Start a frontend on an ephemeral port and return its address.
pub async fn spawn_frontend(config: FrontendConfig) -> SocketAddr {
    let templates = PageTemplates::load().unwrap();
    let base = Arc::new(BasePageConfig::from_config(&config));
    let pages = Arc::new(PageContext::new(
        templates,
        Arc::clone(&base),
        default_translation(),
        "en",
    ));
    let composer = RouteComposer::new(&config, base, lobby_handlers(pages));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = FrontendServer::new(config, composer);

    tokio::spawn(async move {
        // Keep the sender alive for the lifetime of the server task so the
        // graceful-shutdown future stays pending.
        let (_tx, rx) = broadcast::channel(1);
        let _ = server.run(listener, rx).await;
    });

    addr
}

/// A client that follows no redirects, so Location headers stay observable.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
