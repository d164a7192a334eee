//! Embedded resource server.
//!
//! The webclient's CSS and JS are compiled into the binary and served under
//! `{root_path}/resources/{file}`. Responses carry a one-year cache header;
//! content changes are expressed through the cache-busting token in the
//! asset URLs rather than through cache invalidation.

use std::convert::Infallible;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;
use tower::util::BoxCloneSyncService;
use tower::{service_fn, ServiceBuilder};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::routing::RouteHandler;

#[derive(RustEmbed)]
#[folder = "resources/"]
struct ResourceFiles;

/// Duration of 1 year, since asset URLs carry the cache-busting token anyway.
const CACHE_CONTROL_VALUE: &str = "public, max-age=31536000";

/// Handler for `GET {root_path}/resources/{file}`.
pub(crate) fn resource_handler(root_path: &str) -> RouteHandler {
    let strip = format!("{root_path}/resources/");
    let svc = service_fn(move |req: Request<Body>| {
        let response = serve_embedded(req.uri().path(), &strip);
        async move { Ok::<_, Infallible>(response) }
    });
    // Every resource response gets the long-lived cache header, 404s included.
    let svc = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VALUE),
        ))
        .service(svc);
    BoxCloneSyncService::new(svc)
}

fn serve_embedded(path: &str, strip: &str) -> Response {
    let Some(file_name) = path.strip_prefix(strip) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match ResourceFiles::get(file_name) {
        Some(file) => {
            let mime = file.metadata.mimetype().to_string();
            ([(header::CONTENT_TYPE, mime)], file.data.into_owned()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
