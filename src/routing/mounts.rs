//! File-serving handlers for administrator-configured directory mounts.
//!
//! No file I/O happens at mount time; directories are only touched once a
//! request arrives. Unreadable paths surface as request-time 404s rather
//! than startup errors.

use axum::body::Body;
use axum::http::uri::PathAndQuery;
use axum::http::{Request, Uri};
use tower::util::BoxCloneSyncService;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::routing::RouteHandler;

/// Handler serving files from `dir` under `{root_path}/{prefix}/`.
///
/// The mount prefix is stripped from the request path before the file
/// lookup, so `GET {root_path}/{prefix}/a/b` resolves `dir/a/b`.
pub(crate) fn mount_handler(root_path: &str, prefix: &str, dir: &str) -> RouteHandler {
    serve_directory(dir, format!("{root_path}/{prefix}"))
}

/// Handler serving files from `dir` for root-level requests, used as the
/// generic fallback. Only the root path itself is stripped.
pub(crate) fn directory_handler(root_path: &str, dir: &str) -> RouteHandler {
    serve_directory(dir, root_path.to_string())
}

fn serve_directory(dir: &str, strip: String) -> RouteHandler {
    let svc = ServeDir::new(dir)
        .map_request(move |req: Request<Body>| strip_route_prefix(req, &strip))
        .map_response(|res| res.map(Body::new));
    BoxCloneSyncService::new(svc)
}

/// Rewrite the request URI so the path below `prefix` is what the file
/// server resolves. Requests outside the prefix pass through untouched.
fn strip_route_prefix(mut req: Request<Body>, prefix: &str) -> Request<Body> {
    if prefix.is_empty() {
        return req;
    }

    // Only a match on a whole path segment counts; "/drawings" is not below
    // the prefix "/draw".
    let rest = match req.uri().path().strip_prefix(prefix) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => return req,
    };

    let path_and_query = match req.uri().query() {
        Some(query) => format!("{rest}?{query}"),
        None => rest,
    };
    if let Ok(path_and_query) = path_and_query.parse::<PathAndQuery>() {
        let mut parts = req.uri().clone().into_parts();
        parts.path_and_query = Some(path_and_query);
        if let Ok(uri) = Uri::from_parts(parts) {
            *req.uri_mut() = uri;
        }
    }

    req
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_prefix_is_stripped() {
        let req = strip_route_prefix(request("/assets/css/app.css"), "/assets");
        assert_eq!(req.uri().path(), "/css/app.css");
    }

    #[test]
    fn test_query_survives_rewrite() {
        let req = strip_route_prefix(request("/assets/app.css?v=1.2.3"), "/assets");
        assert_eq!(req.uri().path(), "/app.css");
        assert_eq!(req.uri().query(), Some("v=1.2.3"));
    }

    #[test]
    fn test_non_matching_path_is_untouched() {
        let req = strip_route_prefix(request("/other/file.txt"), "/assets");
        assert_eq!(req.uri().path(), "/other/file.txt");
    }

    #[test]
    fn test_empty_prefix_is_a_no_op() {
        let req = strip_route_prefix(request("/file.txt"), "");
        assert_eq!(req.uri().path(), "/file.txt");
    }

    #[test]
    fn test_bare_prefix_resolves_to_root() {
        let req = strip_route_prefix(request("/assets"), "/assets");
        assert_eq!(req.uri().path(), "/");
    }
}
