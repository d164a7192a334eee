//! Route composition.
//!
//! # Responsibilities
//! - Merge directory mounts, the generic fallback, the root route, the
//!   embedded resource route and the lobby endpoints into one registration
//!   sequence
//! - Resolve the root-path tie-break (index page vs. wildcard fallback)
//! - Keep the unnamed ("") mount out of the literal route table
//!
//! # Design Decisions
//! - One-shot composition: `setup_routes` runs at startup and the composer
//!   holds no mutable state afterwards
//! - Mount prefixes are disjoint by construction (config validation), so
//!   their registration order carries no meaning
//! - The index page and the lobby endpoints are injected, never implemented
//!   here; game logic stays on the other side of that boundary

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::IntoResponse;
use tower::util::BoxCloneSyncService;
use tower::{service_fn, ServiceExt};

use crate::config::FrontendConfig;
use crate::pages::BasePageConfig;
use crate::routing::{mounts, resources, RouteHandler};

/// The page-producing endpoints the composer routes to but does not own.
pub struct LobbyHandlers {
    /// Renders the lobby-entry page at the root.
    pub index_page: RouteHandler,

    /// `GET {root_path}/ssrEnterLobby/{lobby_id}`.
    pub enter_lobby: RouteHandler,

    /// `POST {root_path}/ssrCreateLobby`.
    pub create_lobby: RouteHandler,
}

/// Builds the frontend's routing table through an injected registration sink.
pub struct RouteComposer {
    base: Arc<BasePageConfig>,
    serve_directories: HashMap<String, String>,
    handlers: LobbyHandlers,
}

impl RouteComposer {
    pub fn new(
        config: &FrontendConfig,
        base: Arc<BasePageConfig>,
        handlers: LobbyHandlers,
    ) -> Self {
        Self {
            serve_directories: config.serve_directories.clone(),
            base,
            handlers,
        }
    }

    /// The normalized root path all routes are mounted under.
    pub fn root_path(&self) -> &str {
        &self.base.root_path
    }

    /// Register every frontend route with the given sink.
    ///
    /// Patterns use `{name}` for a single path segment; a trailing `/` means
    /// "this prefix and everything below it". The root route is the only one
    /// registered without a trailing slash, which is what separates the exact
    /// root (index page) from prefix matches.
    pub fn setup_routes(&self, register: &mut dyn FnMut(Method, String, RouteHandler)) {
        let root_path = self.root_path();

        let mut directories = self.serve_directories.clone();
        // The unnamed mount becomes the generic fallback and must never show
        // up as a literal route; an empty directory means no fallback.
        let generic_handler = match directories.remove("") {
            Some(dir) if !dir.is_empty() => Some(mounts::directory_handler(root_path, &dir)),
            _ => None,
        };

        for (prefix, dir) in &directories {
            if dir.is_empty() {
                tracing::warn!(prefix = %prefix, "skipping mount without a directory");
                continue;
            }
            register(
                Method::GET,
                // Trailing slash means wildcard.
                format!("{root_path}/{prefix}/"),
                mounts::mount_handler(root_path, prefix, dir),
            );
        }

        register(
            Method::GET,
            root_path.to_string(),
            root_handler(
                root_path.to_string(),
                self.handlers.index_page.clone(),
                generic_handler,
            ),
        );

        register(
            Method::GET,
            format!("{root_path}/resources/{{file}}"),
            resources::resource_handler(root_path),
        );

        register(
            Method::GET,
            format!("{root_path}/ssrEnterLobby/{{lobby_id}}"),
            self.handlers.enter_lobby.clone(),
        );
        register(
            Method::POST,
            format!("{root_path}/ssrCreateLobby"),
            self.handlers.create_lobby.clone(),
        );
    }
}

/// The handler at exactly `{root_path}`: the index page for the root itself,
/// the generic fallback for everything else that reached it, a 404 when no
/// fallback is configured.
fn root_handler(
    root_path: String,
    index_page: RouteHandler,
    generic_handler: Option<RouteHandler>,
) -> RouteHandler {
    let svc = service_fn(move |req: Request<Body>| {
        let index_page = index_page.clone();
        let generic_handler = generic_handler.clone();
        let local_path = {
            let path = req.uri().path();
            match path.strip_prefix(root_path.as_str()) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.to_string(),
                _ => path.to_string(),
            }
        };
        async move {
            if local_path.is_empty() || local_path == "/" {
                return index_page.oneshot(req).await;
            }
            match generic_handler {
                Some(handler) => handler.oneshot(req).await,
                None => Ok(StatusCode::NOT_FOUND.into_response()),
            }
        }
    });
    BoxCloneSyncService::new(svc)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use axum::response::Response;

    use super::*;

    /// A handler that answers every request with a fixed marker body.
    fn marker_handler(marker: &'static str) -> RouteHandler {
        BoxCloneSyncService::new(service_fn(move |_req: Request<Body>| async move {
            Ok::<_, Infallible>(marker.into_response())
        }))
    }

    fn stub_lobby_handlers() -> LobbyHandlers {
        LobbyHandlers {
            index_page: marker_handler("index"),
            enter_lobby: marker_handler("enter"),
            create_lobby: marker_handler("create"),
        }
    }

    fn composer(root_path: &str, directories: &[(&str, &str)]) -> RouteComposer {
        let mut config = FrontendConfig::default();
        config.root_path = root_path.to_string();
        config.serve_directories = directories
            .iter()
            .map(|(prefix, dir)| (prefix.to_string(), dir.to_string()))
            .collect();
        let base = Arc::new(BasePageConfig::from_config(&config));
        RouteComposer::new(&config, base, stub_lobby_handlers())
    }

    fn registered_routes(composer: &RouteComposer) -> Vec<(Method, String)> {
        let mut routes = Vec::new();
        composer.setup_routes(&mut |method, pattern, _handler| {
            routes.push((method, pattern));
        });
        routes
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_route_table_for_plain_deployment() {
        let composer = composer("", &[("", "/www"), ("assets", "/static")]);
        let routes = registered_routes(&composer);

        assert_eq!(
            routes,
            vec![
                (Method::GET, "/assets/".to_string()),
                (Method::GET, String::new()),
                (Method::GET, "/resources/{file}".to_string()),
                (Method::GET, "/ssrEnterLobby/{lobby_id}".to_string()),
                (Method::POST, "/ssrCreateLobby".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_prefix_never_becomes_a_literal_route() {
        let composer = composer("", &[("", "/www")]);
        let routes = registered_routes(&composer);

        assert!(routes.iter().all(|(_, pattern)| pattern != "//"));
        assert!(routes.iter().all(|(_, pattern)| pattern != "/"));
    }

    #[test]
    fn test_mount_without_directory_is_skipped() {
        let composer = composer("", &[("assets", "")]);
        let routes = registered_routes(&composer);

        assert!(routes.iter().all(|(_, pattern)| pattern != "/assets/"));
    }

    #[test]
    fn test_root_path_prefixes_every_pattern() {
        let composer = composer("draw", &[("assets", "/static")]);
        let routes = registered_routes(&composer);

        assert!(routes.iter().any(|(_, p)| p == "/draw/assets/"));
        assert!(routes.iter().any(|(_, p)| p == "/draw"));
        assert!(routes.iter().any(|(_, p)| p == "/draw/resources/{file}"));
        assert!(routes.iter().any(|(_, p)| p == "/draw/ssrCreateLobby"));
    }

    #[tokio::test]
    async fn test_root_handler_serves_index_at_root() {
        let handler = root_handler("".to_string(), marker_handler("index"), Some(marker_handler("fallback")));
        let response = handler.oneshot(request("/")).await.unwrap();
        assert_eq!(body_string(response).await, "index");
    }

    #[tokio::test]
    async fn test_root_handler_prefers_index_over_fallback() {
        let handler = root_handler(
            "/draw".to_string(),
            marker_handler("index"),
            Some(marker_handler("fallback")),
        );
        let response = handler.oneshot(request("/draw/")).await.unwrap();
        assert_eq!(body_string(response).await, "index");
    }

    #[tokio::test]
    async fn test_root_handler_delegates_other_paths_to_fallback() {
        let handler = root_handler(
            "".to_string(),
            marker_handler("index"),
            Some(marker_handler("fallback")),
        );
        let response = handler.oneshot(request("/anything.html")).await.unwrap();
        assert_eq!(body_string(response).await, "fallback");
    }

    #[tokio::test]
    async fn test_root_handler_404s_without_fallback() {
        let handler = root_handler("".to_string(), marker_handler("index"), None);
        let response = handler.oneshot(request("/anything.html")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
