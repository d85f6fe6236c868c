//! Message identifiers for user-facing strings.
//!
//! The core only ever picks one of these; rendering is left to the catalog
//! (or to the host's own localization layer, keyed by `key()`).

/// Fixed set of localization message IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    ModalTitle,
    Engine,
    Source,
    Target,
    Translate,
    SuccessTitle,
    SuccessMessage,
    ErrorTitle,
    ErrorMessage,
    InvalidEngine,
    NoSourceText,
    WarningTitle,
}

impl MessageId {
    pub const ALL: [MessageId; 12] = [
        MessageId::ModalTitle,
        MessageId::Engine,
        MessageId::Source,
        MessageId::Target,
        MessageId::Translate,
        MessageId::SuccessTitle,
        MessageId::SuccessMessage,
        MessageId::ErrorTitle,
        MessageId::ErrorMessage,
        MessageId::InvalidEngine,
        MessageId::NoSourceText,
        MessageId::WarningTitle,
    ];

    /// Stable key used by host localization files (e.g., "no_source_text").
    pub fn key(&self) -> &'static str {
        match self {
            MessageId::ModalTitle => "modal_title",
            MessageId::Engine => "engine",
            MessageId::Source => "source",
            MessageId::Target => "target",
            MessageId::Translate => "translate",
            MessageId::SuccessTitle => "success_title",
            MessageId::SuccessMessage => "success_message",
            MessageId::ErrorTitle => "error_title",
            MessageId::ErrorMessage => "error_message",
            MessageId::InvalidEngine => "invalid_engine",
            MessageId::NoSourceText => "no_source_text",
            MessageId::WarningTitle => "warning_title",
        }
    }

    pub fn from_key(key: &str) -> Option<MessageId> {
        MessageId::ALL.into_iter().find(|id| id.key() == key)
    }
}
