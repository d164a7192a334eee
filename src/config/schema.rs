//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the frontend.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the game frontend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// URL path prefix under which all routes are mounted. For example when
    /// the game is hosted at painting.example/draw next to an existing
    /// website, this would be "draw". May be empty.
    pub root_path: String,

    /// Scheme and host the frontend is reachable under, e.g.
    /// "https://painting.example". Only used for page metadata; may be empty.
    pub root_url: String,

    /// Mapping of route prefix to directory to serve files from. The empty
    /// prefix is special: its directory becomes the generic fallback that
    /// answers root-level requests no other route matches. An empty directory
    /// under the empty prefix means "no fallback configured".
    pub serve_directories: HashMap<String, String>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Default log filter directive, overridable via RUST_LOG.
    pub log_level: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            root_path: String::new(),
            root_url: String::new(),
            serve_directories: HashMap::new(),
            timeouts: TimeoutConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}
