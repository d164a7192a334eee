//! Route composition subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     FrontendConfig.serve_directories + BasePageConfig
//!         → composer.rs (RouteComposer::setup_routes)
//!             → mounts.rs    (one file-serving handler per directory mount)
//!             → resources.rs (embedded asset handler, cache headers)
//!             → injected lobby handlers (opaque)
//!         → register(method, pattern, handler) sink owned by the transport
//! ```
//!
//! # Design Decisions
//! - The composer registers handlers through a generic sink and never stores
//!   the resulting table; the transport owns dispatch
//! - Patterns use `{name}` for a single segment; a trailing `/` means "this
//!   prefix and everything below it"
//! - The root route is registered WITHOUT a trailing slash while mounts get
//!   one, which is what keeps "exact root" and "everything else" apart
//! - Handlers are boxed clonable tower services, so file servers, closures
//!   and axum handlers all fit through the same sink

pub mod composer;
pub mod mounts;
pub mod resources;

use std::convert::Infallible;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::util::BoxCloneSyncService;

/// A request handler as the registration sink sees it: a clonable,
/// infallible tower service from request to response.
pub type RouteHandler = BoxCloneSyncService<Request<Body>, Response, Infallible>;

pub use composer::{LobbyHandlers, RouteComposer};
