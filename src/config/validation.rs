//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject mount prefixes that would shadow built-in routes
//! - Validate the listener bind address
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config value
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::FrontendConfig;

/// Route prefixes claimed by the frontend itself. A static mount under one
/// of these would be shadowed or would shadow the built-in route, so they
/// are rejected up front.
const RESERVED_PREFIXES: [&str; 3] = ["resources", "ssrEnterLobby", "ssrCreateLobby"];

/// A single semantic error found in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mount prefix {0:?} must be a single path segment without '/'")]
    PrefixContainsSlash(String),

    #[error("mount prefix {0:?} collides with a built-in route")]
    ReservedPrefix(String),

    #[error("root path {0:?} must not contain the reserved \"resources\" segment")]
    ReservedRootSegment(String),

    #[error("listener bind address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),
}

/// Check a deserialized config for semantic errors.
///
/// All errors are collected so an administrator can fix a broken config in
/// one pass.
pub fn validate_config(config: &FrontendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for prefix in config.serve_directories.keys() {
        // The empty prefix is the generic fallback and never becomes a route.
        if prefix.is_empty() {
            continue;
        }
        if prefix.contains('/') {
            errors.push(ValidationError::PrefixContainsSlash(prefix.clone()));
        }
        if RESERVED_PREFIXES.contains(&prefix.as_str()) {
            errors.push(ValidationError::ReservedPrefix(prefix.clone()));
        }
    }

    if config
        .root_path
        .split('/')
        .any(|segment| segment == "resources")
    {
        errors.push(ValidationError::ReservedRootSegment(config.root_path.clone()));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
