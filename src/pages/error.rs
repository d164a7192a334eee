//! Error page rendering.

use axum::response::Html;
use serde::Serialize;

use crate::pages::{BasePageConfig, PageContext};
use crate::translations::Translation;

/// Data the error-page template requires to be displayed.
#[derive(Serialize)]
pub struct ErrorPageData<'a> {
    /// Shared page configuration, flattened into the template context.
    #[serde(flatten)]
    pub base: &'a BasePageConfig,

    /// Message displayed on the page.
    pub error_message: &'a str,

    pub translation: &'a Translation,
    pub locale: &'a str,
}

impl PageContext {
    /// Return the occurred error as a custom HTML page to the caller.
    ///
    /// A template execution failure means the deployed build is corrupt and
    /// escalates instead of producing a partial page.
    pub fn user_facing_error(&self, error_message: &str) -> Html<String> {
        let data = ErrorPageData {
            base: &self.base,
            error_message,
            translation: &self.translation,
            locale: &self.locale,
        };
        match self.templates.render("error-page", &data) {
            Ok(html) => Html(html),
            Err(err) => panic!("error page template failed to render: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::FrontendConfig;
    use crate::pages::PageTemplates;
    use crate::translations::default_translation;

    fn page_context() -> PageContext {
        PageContext::new(
            PageTemplates::load().unwrap(),
            Arc::new(BasePageConfig::from_config(&FrontendConfig::default())),
            default_translation(),
            "en",
        )
    }

    #[test]
    fn test_error_page_contains_message() {
        let context = page_context();
        let Html(html) = context.user_facing_error("the lobby does not exist");
        assert!(html.contains("the lobby does not exist"));
    }

    #[test]
    fn test_base_config_is_shared_across_renders() {
        let context = page_context();
        let before = Arc::clone(&context.base);
        context.user_facing_error("first");
        context.user_facing_error("second");
        assert!(Arc::ptr_eq(&before, &context.base));
    }

    #[test]
    fn test_error_page_data_flattens_base_config() {
        let base = BasePageConfig::from_config(&FrontendConfig::default());
        let translation = default_translation();
        let data = ErrorPageData {
            base: &base,
            error_message: "boom",
            translation: &translation,
            locale: "en",
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["error_message"], "boom");
        // Base fields sit at the top level of the template context.
        assert_eq!(value["cache_bust"], base.cache_bust.as_str());
        assert_eq!(value["root_path"], "");
    }
}
