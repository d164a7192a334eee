//! Page template store.
//!
//! Templates are compiled into the binary and parsed exactly once at process
//! start. The parsed set is read-only afterward, so it can be shared across
//! request handlers without locks.

use rust_embed::RustEmbed;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateFiles;

/// Error type for template loading.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template {0:?} is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("failed to parse templates: {0}")]
    Parse(#[from] tera::Error),
}

/// The parsed HTML template set.
pub struct PageTemplates {
    tera: Tera,
}

impl PageTemplates {
    /// Parse all embedded templates. Called once at startup; a failure here
    /// means the build is unusable and startup must abort.
    pub fn load() -> Result<Self, TemplateError> {
        let mut raw = Vec::new();
        for name in TemplateFiles::iter() {
            // iter() only yields names of embedded files, so get() can't miss.
            let Some(file) = TemplateFiles::get(&name) else {
                continue;
            };
            let source = String::from_utf8(file.data.into_owned())
                .map_err(|_| TemplateError::InvalidUtf8(name.to_string()))?;
            raw.push((template_name(&name).to_string(), source));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(raw)?;

        Ok(Self { tera })
    }

    /// Render the named template with the given page data.
    pub fn render(&self, name: &str, data: &impl Serialize) -> Result<String, tera::Error> {
        let context = Context::from_serialize(data)?;
        self.tera.render(name, &context)
    }
}

/// Templates are addressed by file stem, so "error-page.html" renders as
/// "error-page".
fn template_name(file_name: &str) -> &str {
    file_name.strip_suffix(".html").unwrap_or(file_name)
}
