use std::collections::HashMap;

/// Access to a record's localized field values.
///
/// Implemented by the host's persistence layer; this crate never saves
/// anything itself.
pub trait RecordStore {
    /// Value of `field` in `locale`, if the record has one.
    fn localized_value(&self, field: &str, locale: &str) -> Option<String>;

    fn set_localized_value(&mut self, field: &str, locale: &str, value: String);

    /// Locales holding non-empty content for `field`, in the record's order.
    fn filled_locales(&self, field: &str) -> Vec<String>;

    /// Active translation locale of records with multi-locale storage.
    fn active_locale(&self) -> Option<String> {
        None
    }
}

/// Record kept in memory, one ordered list of (locale, value) per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryRecord {
    fields: HashMap<String, Vec<(String, String)>>,
    active_locale: Option<String>,
}

impl InMemoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(
        mut self,
        field: impl Into<String>,
        locale: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let locale = locale.into();
        self.set_localized_value(&field, &locale, value.into());
        self
    }

    pub fn with_active_locale(mut self, locale: impl Into<String>) -> Self {
        self.active_locale = Some(locale.into());
        self
    }
}

impl RecordStore for InMemoryRecord {
    fn localized_value(&self, field: &str, locale: &str) -> Option<String> {
        self.fields
            .get(field)?
            .iter()
            .find(|(code, _)| code == locale)
            .map(|(_, value)| value.clone())
    }

    fn set_localized_value(&mut self, field: &str, locale: &str, value: String) {
        let values = self.fields.entry(field.to_string()).or_default();
        match values.iter_mut().find(|(code, _)| code == locale) {
            Some((_, existing)) => *existing = value,
            None => values.push((locale.to_string(), value)),
        }
    }

    fn filled_locales(&self, field: &str) -> Vec<String> {
        self.fields
            .get(field)
            .map(|values| {
                values
                    .iter()
                    .filter(|(_, value)| !value.trim().is_empty())
                    .map(|(code, _)| code.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn active_locale(&self) -> Option<String> {
        self.active_locale.clone()
    }
}
