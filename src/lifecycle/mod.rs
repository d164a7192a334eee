//! Lifecycle management subsystem.
//!
//! ```text
//! SIGINT / ctrl-c → Shutdown::trigger → broadcast → tasks drain and exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
