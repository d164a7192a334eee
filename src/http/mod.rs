//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → routing table built once from RouteComposer registrations
//!     → matched handler renders the response
//! ```

pub mod server;

pub use server::FrontendServer;
