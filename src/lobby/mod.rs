//! SSR entry points for the lobby pages.
//!
//! This is the injected side of the routing boundary: the composer routes to
//! these handlers but never calls into them. Lobby state itself lives in the
//! game server; this module only renders the pages around it.

pub mod handlers;

pub use handlers::lobby_handlers;
