//! HTTP server setup.
//!
//! # Responsibilities
//! - Translate the composer's registration sequence into an Axum router
//! - Wire up middleware (tracing, request timeout)
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - The router is built once at startup and owns the dispatch table; the
//!   composer never sees it
//! - Trailing-slash patterns become wildcard routes, the bare root pattern
//!   additionally becomes the router fallback, so "no other route matched"
//!   reaches the root handler without relying on the router's precedence
//!   rules

use std::time::Duration;

use axum::http::Method;
use axum::routing::{on_service, MethodFilter};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::FrontendConfig;
use crate::routing::{RouteComposer, RouteHandler};

/// HTTP server for the game frontend.
pub struct FrontendServer {
    router: Router,
    config: FrontendConfig,
}

impl FrontendServer {
    /// Build the server from the loaded configuration and the composed
    /// routing table.
    pub fn new(config: FrontendConfig, composer: RouteComposer) -> Self {
        let router = Self::build_router(&config, &composer);
        Self { router, config }
    }

    /// Collect the composer's registrations and translate them into Axum
    /// routes.
    fn build_router(config: &FrontendConfig, composer: &RouteComposer) -> Router {
        let mut registrations: Vec<(Method, String, RouteHandler)> = Vec::new();
        composer.setup_routes(&mut |method, pattern, handler| {
            registrations.push((method, pattern, handler));
        });

        let root = composer.root_path().to_string();
        let mut router = Router::new();
        for (method, pattern, handler) in registrations {
            let filter =
                MethodFilter::try_from(method).expect("unsupported method in route table");
            if let Some(prefix) = pattern.strip_suffix('/') {
                // Trailing slash: this prefix and everything below it.
                router = router.route(&format!("{prefix}/{{*path}}"), on_service(filter, handler));
            } else if pattern == root {
                // The root handler answers the root itself and, as the
                // fallback, every path no other route claimed.
                let exact = if pattern.is_empty() { "/" } else { pattern.as_str() };
                router = router.route(exact, on_service(filter, handler.clone()));
                router = router.fallback_service(handler);
            } else {
                router = router.route(&pattern, on_service(filter, handler));
            }
        }

        router
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
