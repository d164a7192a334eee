//! Server-side page rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     embedded templates/ → templates.rs (parse once) → PageTemplates
//!     FrontendConfig + build metadata → base.rs → BasePageConfig
//!     both → PageContext, shared via Arc to every page handler
//!
//! Request:
//!     handler → PageContext::render → HTML response
//!     handler error → error.rs (user_facing_error) → error page
//! ```
//!
//! # Design Decisions
//! - Templates are parsed once at process start and read-only afterward
//! - BasePageConfig is constructed exactly once and shared by reference
//! - A template execution failure at request time is a corrupt deployment
//!   and aborts the response pipeline instead of degrading

pub mod base;
pub mod error;
pub mod templates;

use std::sync::Arc;

pub use base::BasePageConfig;
pub use error::ErrorPageData;
pub use templates::{PageTemplates, TemplateError};

use crate::translations::Translation;

/// Everything a page handler needs to render HTML.
///
/// Built once at startup; handlers receive it behind an `Arc` and never
/// mutate it.
pub struct PageContext {
    /// Parsed template set.
    pub templates: PageTemplates,

    /// Data all pages require, shared across every render.
    pub base: Arc<BasePageConfig>,

    /// Localization bundle for the configured locale.
    pub translation: Translation,

    /// Locale the translation bundle was selected for.
    pub locale: String,
}

impl PageContext {
    pub fn new(
        templates: PageTemplates,
        base: Arc<BasePageConfig>,
        translation: Translation,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            templates,
            base,
            translation,
            locale: locale.into(),
        }
    }
}
