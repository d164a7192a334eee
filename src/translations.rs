//! Boundary to the localization subsystem.
//!
//! The frontend only carries a translation bundle into template contexts;
//! locale negotiation and the translation catalogs themselves live outside
//! this crate.

use std::collections::BTreeMap;

use serde::Serialize;

/// An opaque bundle of translated strings for one locale.
///
/// Serializes as a flat map so templates can address entries directly, e.g.
/// `{{ translation.create_lobby }}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Translation(BTreeMap<String, String>);

impl Translation {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// The built-in English bundle, used until a translation source is wired up.
pub fn default_translation() -> Translation {
    Translation::from_entries([
        ("title", "Sketch & Guess"),
        ("lobby_name", "Lobby name"),
        ("create_lobby", "Create lobby"),
        ("join_hint", "Share the lobby link with your friends to let them join."),
        ("error_title", "Something went wrong"),
        ("back", "Back to the start page"),
    ])
}
