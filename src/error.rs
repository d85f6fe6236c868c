use crate::i18n::MessageId;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single provider call.
///
/// Every variant carries the provider's own message so it can be shown to
/// the user next to the generic error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("authentication failed: {0}")]
    Unauthorized(String),

    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    #[error("client setup failed: {0}")]
    Client(String),
}

impl EngineError {
    /// The provider's message without the category prefix.
    pub fn provider_message(&self) -> String {
        match self {
            EngineError::Network(message)
            | EngineError::Unauthorized(message)
            | EngineError::RateLimited(message)
            | EngineError::QuotaExceeded(message)
            | EngineError::InvalidResponse(message)
            | EngineError::Client(message) => message.clone(),
            EngineError::Rejected { message, .. } | EngineError::Provider { message, .. } => {
                message.clone()
            }
            EngineError::Timeout(_) => self.to_string(),
        }
    }
}

/// Errors of engine selection and the translate operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("translation engine '{0}' is not configured")]
    UnknownEngine(String),

    #[error("translation engine '{engine}' is misconfigured: {reason}")]
    MisconfiguredEngine { engine: String, reason: String },

    #[error("there is no source text to translate")]
    EmptySource,

    #[error("source and target locale are both '{0}'")]
    SameLocale(String),

    #[error("translation failed: {0}")]
    Engine(#[from] EngineError),
}

impl TranslateError {
    /// `EmptySource` is a user warning; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, TranslateError::EmptySource)
    }

    /// Localized message shown for this error.
    pub fn message_id(&self) -> MessageId {
        match self {
            TranslateError::UnknownEngine(_) | TranslateError::MisconfiguredEngine { .. } => {
                MessageId::InvalidEngine
            }
            TranslateError::EmptySource => MessageId::NoSourceText,
            TranslateError::SameLocale(_) | TranslateError::Engine(_) => MessageId::ErrorMessage,
        }
    }

    /// Detail appended after the localized message, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            TranslateError::Engine(error) => Some(error.provider_message()),
            TranslateError::SameLocale(_) => Some(self.to_string()),
            _ => None,
        }
    }
}
