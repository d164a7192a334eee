//! Data all pages require to function correctly, no matter whether error
//! page or lobby page.

use serde::Serialize;

use crate::config::FrontendConfig;

/// Page configuration shared by every rendered page.
///
/// Constructed exactly once per process and shared read-only; no field is
/// mutated after construction.
#[derive(Debug, Serialize)]
pub struct BasePageConfig {
    /// Tagged source code version of this build. Can be empty for dev builds.
    pub version: String,

    /// Commit that was deployed, if the build wasn't a tagged release.
    pub commit: String,

    /// URL path prefix all routes are mounted under. Either empty or of the
    /// form "/prefix" (leading slash, no trailing slash).
    pub root_path: String,

    /// Protocol and domain the frontend is reachable under, e.g.
    /// "https://painting.example". Required only for page metadata tags.
    pub root_url: String,

    /// Token appended to resource URLs so that browsers drop cached data of
    /// a previous version while long-lived max-age values stay in place.
    pub cache_bust: String,
}

impl BasePageConfig {
    /// Build the page configuration from the loaded config and the build
    /// metadata baked in at compile time.
    pub fn from_config(config: &FrontendConfig) -> Self {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let commit = option_env!("SOURCE_COMMIT").unwrap_or_default().to_string();
        let cache_bust = if commit.is_empty() {
            version.clone()
        } else {
            format!("{version}-{commit}")
        };

        Self {
            version,
            commit,
            root_path: normalize_root_path(&config.root_path),
            root_url: config.root_url.trim_end_matches('/').to_string(),
            cache_bust,
        }
    }
}

/// Bring the configured root path into the canonical "" or "/prefix" form
/// the routing code expects, tolerating stray slashes in the config value.
fn normalize_root_path(raw: &str) -> String {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
