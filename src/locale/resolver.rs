//! Locale-default resolution for the translate action.
//!
//! Picks which source locales to offer (and which one to preselect) from the
//! configured default and the locales a record already has content for, and
//! picks a target locale that best matches the field currently being edited.
//! Every function here is pure; the offered sets are always restricted to
//! what the selected engine supports.

use crate::locale::LocaleMap;
use serde::{Deserialize, Serialize};

/// How the source-locale candidates are assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLocaleStrategy {
    /// Configured default first, then every locale the record already fills
    #[default]
    Dynamic,
    /// Only the configured default
    Fixed,
}

/// Prioritized source-locale candidates.
///
/// Configured locale first (when present), then the filled locales in the
/// order given, de-duplicated, keeping only codes the engine supports.
/// The first item is the default selection.
pub fn prioritized_source_locales<'a, I>(
    configured: Option<&str>,
    filled: I,
    supported: &LocaleMap,
    strategy: SourceLocaleStrategy,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let filled: Vec<&str> = match strategy {
        SourceLocaleStrategy::Dynamic => filled.into_iter().collect(),
        SourceLocaleStrategy::Fixed => Vec::new(),
    };

    let mut prioritized: Vec<String> = Vec::new();
    for code in configured.into_iter().chain(filled) {
        if code.is_empty() || !supported.contains(code) {
            continue;
        }
        if !prioritized.iter().any(|existing| existing == code) {
            prioritized.push(code.to_string());
        }
    }
    prioritized
}

/// Source options with the engine's labels, in priority order.
pub fn source_locale_options<'a, I>(
    configured: Option<&str>,
    filled: I,
    supported: &LocaleMap,
    strategy: SourceLocaleStrategy,
) -> LocaleMap
where
    I: IntoIterator<Item = &'a str>,
{
    prioritized_source_locales(configured, filled, supported, strategy)
        .into_iter()
        .filter_map(|code| {
            let label = supported.label(&code)?.to_string();
            Some((code, label))
        })
        .collect()
}

/// Every engine locale except the chosen source.
pub fn target_locale_options(supported: &LocaleMap, source: Option<&str>) -> LocaleMap {
    supported.filter(|code| Some(code) != source)
}

/// Default target for a field being edited in `current_field_locale`.
///
/// Among the target candidates an exact match wins, then a candidate sharing
/// the first two characters (the base language), then the first candidate.
/// Returns `None` only when the engine offers no candidate at all.
pub fn default_target_locale(
    supported: &LocaleMap,
    source: Option<&str>,
    current_field_locale: &str,
) -> Option<String> {
    let candidates = target_locale_options(supported, source);

    let exact = candidates
        .codes()
        .find(|code| code.eq_ignore_ascii_case(current_field_locale));

    let chosen = exact
        .or_else(|| {
            candidates
                .codes()
                .find(|code| shares_base_language(code, current_field_locale))
        })
        .or_else(|| candidates.first_code());

    chosen.map(str::to_string)
}

/// Locale of the field instance being edited.
///
/// The record's active translation locale wins (multi-locale records), then
/// the field's own locale, then the application locale.
pub fn current_field_locale(
    record_locale: Option<&str>,
    field_locale: Option<&str>,
    app_locale: &str,
) -> String {
    record_locale
        .filter(|locale| !locale.is_empty())
        .or_else(|| field_locale.filter(|locale| !locale.is_empty()))
        .unwrap_or(app_locale)
        .to_string()
}

fn shares_base_language(a: &str, b: &str) -> bool {
    match (a.get(..2), b.get(..2)) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}
