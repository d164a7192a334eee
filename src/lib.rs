//! Web front door for a browser multiplayer game server.
//!
//! Decides, for every inbound HTTP request, which content source answers it:
//!
//! ```text
//! Incoming request
//!     → http/server.rs (Axum router, middleware)
//!         → routing/mounts.rs     (admin-configured static directories)
//!         → routing/resources.rs  (embedded CSS/JS, long-lived caching)
//!         → pages/                (server-rendered HTML from templates)
//!         → lobby/                (lobby create/enter endpoints)
//! ```
//!
//! All state the handlers consume (page configuration, parsed templates, the
//! embedded resource archive) is built once at startup and shared read-only;
//! request handling never contends on writes.

// Core subsystems
pub mod config;
pub mod http;
pub mod pages;
pub mod routing;

// Page content
pub mod lobby;
pub mod translations;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::FrontendConfig;
pub use http::FrontendServer;
pub use lifecycle::Shutdown;
