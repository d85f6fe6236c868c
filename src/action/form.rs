use crate::locale::LocaleMap;

/// What the user has picked so far in the action's modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSelection {
    pub engine: Option<String>,
    pub source_locale: Option<String>,
}

/// Options and defaults for the action's modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionForm {
    /// (engine key, display label) in configuration order
    pub engine_options: Vec<(String, String)>,
    pub default_engine: String,

    /// Prioritized source locales; the first is the default
    pub source_options: LocaleMap,
    pub default_source: Option<String>,

    /// Engine locales minus the selected source
    pub target_options: LocaleMap,
    pub default_target: Option<String>,
}

/// Engine select label: the upper-cased engine key.
pub fn engine_option_label(engine: &str) -> String {
    engine.to_uppercase()
}
