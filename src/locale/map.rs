//! Ordered locale map: locale code -> human label.
//!
//! Iteration order is insertion order. The first entry matters: it is the
//! last-resort default target, so the map never reorders its entries.

use serde::{Deserialize, Serialize};

/// A single locale code with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// Locale code as understood by the engine (e.g., "pt-br")
    pub code: String,

    /// Human readable label (e.g., "Portuguese (Brazil)")
    pub label: String,
}

impl LocaleEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Ordered mapping of locale codes to labels with unique codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LocaleEntry>", into = "Vec<LocaleEntry>")]
pub struct LocaleMap {
    entries: Vec<LocaleEntry>,
}

impl LocaleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a locale. Re-inserting an existing code replaces its label
    /// but keeps its original position.
    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) {
        let code = code.into();
        let label = label.into();
        match self.entries.iter_mut().find(|entry| entry.code == code) {
            Some(entry) => entry.label = label,
            None => self.entries.push(LocaleEntry { code, label }),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.label.as_str())
    }

    /// Codes in iteration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    pub fn first_code(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only entries whose code satisfies the predicate, preserving order.
    pub fn filter<P>(&self, mut predicate: P) -> LocaleMap
    where
        P: FnMut(&str) -> bool,
    {
        LocaleMap {
            entries: self
                .entries
                .iter()
                .filter(|entry| predicate(&entry.code))
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<LocaleEntry>> for LocaleMap {
    fn from(entries: Vec<LocaleEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<LocaleMap> for Vec<LocaleEntry> {
    fn from(map: LocaleMap) -> Self {
        map.entries
    }
}

impl FromIterator<LocaleEntry> for LocaleMap {
    fn from_iter<I: IntoIterator<Item = LocaleEntry>>(iter: I) -> Self {
        let mut map = LocaleMap::new();
        for entry in iter {
            map.insert(entry.code, entry.label);
        }
        map
    }
}

impl<C, L> FromIterator<(C, L)> for LocaleMap
where
    C: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, L)>>(iter: I) -> Self {
        let mut map = LocaleMap::new();
        for (code, label) in iter {
            map.insert(code, label);
        }
        map
    }
}

impl<'a> IntoIterator for &'a LocaleMap {
    type Item = &'a LocaleEntry;
    type IntoIter = std::slice::Iter<'a, LocaleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deepl_locales() -> LocaleMap {
        [
            ("en-us", "English (American)"),
            ("es", "Spanish (Spain)"),
            ("pt-br", "Portuguese (Brazil)"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_preserves_insertion_order() {
        let map = deepl_locales();
        let codes: Vec<&str> = map.codes().collect();
        assert_eq!(codes, vec!["en-us", "es", "pt-br"]);
        assert_eq!(map.first_code(), Some("en-us"));
    }

    #[test]
    fn test_reinsert_keeps_position_and_updates_label() {
        let mut map = deepl_locales();
        map.insert("en-us", "English (US)");

        assert_eq!(map.len(), 3);
        assert_eq!(map.first_code(), Some("en-us"));
        assert_eq!(map.label("en-us"), Some("English (US)"));
    }

    #[test]
    fn test_contains_and_label() {
        let map = deepl_locales();
        assert!(map.contains("es"));
        assert!(!map.contains("fr"));
        assert_eq!(map.label("pt-br"), Some("Portuguese (Brazil)"));
        assert_eq!(map.label("fr"), None);
    }

    #[test]
    fn test_filter_preserves_order() {
        let map = deepl_locales();
        let filtered = map.filter(|code| code != "es");
        let codes: Vec<&str> = filtered.codes().collect();
        assert_eq!(codes, vec!["en-us", "pt-br"]);
    }

    #[test]
    fn test_empty_map() {
        let map = LocaleMap::new();
        assert!(map.is_empty());
        assert_eq!(map.first_code(), None);
    }

    #[test]
    fn test_deserialize_deduplicates_codes() {
        let json = r#"[
            {"code": "es", "label": "Spanish"},
            {"code": "pt", "label": "Portuguese"},
            {"code": "es", "label": "Spanish (Spain)"}
        ]"#;
        let map: LocaleMap = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(map.len(), 2);
        assert_eq!(map.first_code(), Some("es"));
        assert_eq!(map.label("es"), Some("Spanish (Spain)"));
    }
}
