//! Message catalog: single source of truth for the bundled UI languages.
//!
//! Initialized once on first access (`OnceLock`) and immutable thereafter.

use crate::i18n::strings::{ENGLISH_STRINGS, PORTUGUESE_BR_STRINGS, SPANISH_STRINGS};
use crate::i18n::{MessageId, MessageStrings};
use std::sync::OnceLock;

/// Fallback locale when nothing else matches.
pub const FALLBACK_LOCALE: &str = "en";

/// Strings bundled for one locale.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Lowercase locale code (e.g., "en", "pt-br")
    pub code: &'static str,
    pub strings: &'static MessageStrings,
}

pub struct MessageCatalog {
    entries: Vec<CatalogEntry>,
}

static CATALOG: OnceLock<MessageCatalog> = OnceLock::new();

impl MessageCatalog {
    pub fn get() -> &'static MessageCatalog {
        CATALOG.get_or_init(|| MessageCatalog {
            entries: bundled_entries(),
        })
    }

    /// Codes of all bundled locales.
    pub fn locales(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.code).collect()
    }

    /// Strings for a locale.
    ///
    /// Lookup is case-insensitive and accepts `_` as separator. Falls back
    /// to the base language ("es-MX" -> "es", "pt" -> "pt-br"), then to
    /// English.
    pub fn strings_for(&self, locale: &str) -> &'static MessageStrings {
        let normalized = locale.trim().replace('_', "-").to_ascii_lowercase();
        let base = normalized.split('-').next().unwrap_or_default();

        self.entries
            .iter()
            .find(|entry| entry.code == normalized)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.code.split('-').next() == Some(base))
            })
            .or_else(|| self.entries.iter().find(|entry| entry.code == FALLBACK_LOCALE))
            .map(|entry| entry.strings)
            .unwrap_or(&ENGLISH_STRINGS)
    }

    pub fn message(&self, locale: &str, id: MessageId) -> &'static str {
        self.strings_for(locale).get(id)
    }
}

fn bundled_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            code: "en",
            strings: &ENGLISH_STRINGS,
        },
        CatalogEntry {
            code: "es",
            strings: &SPANISH_STRINGS,
        },
        CatalogEntry {
            code: "pt-br",
            strings: &PORTUGUESE_BR_STRINGS,
        },
    ]
}
