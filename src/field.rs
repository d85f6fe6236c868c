//! Form fields that can opt into the translate action.
//!
//! Whether a field gets the action is decided when the field is built, from
//! the kind's `supports_suffix_actions` capability.

use crate::action::TranslateAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    TextInput,
    Textarea,
    RichEditor,
    MarkdownEditor,
    Select,
    Toggle,
    DatePicker,
    FileUpload,
}

impl FieldKind {
    /// Text-bearing kinds that can show trailing (suffix) actions.
    pub fn supports_suffix_actions(&self) -> bool {
        matches!(
            self,
            FieldKind::TextInput
                | FieldKind::Textarea
                | FieldKind::RichEditor
                | FieldKind::MarkdownEditor
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    name: String,
    kind: FieldKind,
    locale: Option<String>,
    suffix_actions: Vec<TranslateAction>,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            locale: None,
            suffix_actions: Vec::new(),
        }
    }

    /// Locale this field instance edits (e.g., one tab of a localized form).
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Attach the translate action when the kind supports suffix actions.
    ///
    /// `active_locale` overrides the field's own locale for the action.
    /// Other kinds are returned unchanged.
    pub fn translatable(mut self, active_locale: Option<String>) -> Self {
        if self.kind.supports_suffix_actions() {
            let locale = active_locale.or_else(|| self.locale.clone());
            self.suffix_actions
                .push(TranslateAction::new(self.name.clone()).active_locale(locale));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn field_locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn suffix_actions(&self) -> &[TranslateAction] {
        &self.suffix_actions
    }

    /// The attached translate action, if the field opted in.
    pub fn translate_action(&self) -> Option<&TranslateAction> {
        self.suffix_actions.first()
    }
}
