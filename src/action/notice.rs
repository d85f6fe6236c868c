use crate::error::TranslateError;
use crate::i18n::{MessageCatalog, MessageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Outcome of a translate action, as message IDs for the host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: MessageId,
    pub body: MessageId,

    /// Appended to the body (e.g., the provider's error message)
    pub detail: Option<String>,
}

impl Notice {
    pub fn from_result(result: &Result<String, TranslateError>) -> Self {
        match result {
            Ok(_) => Notice {
                level: NoticeLevel::Success,
                title: MessageId::SuccessTitle,
                body: MessageId::SuccessMessage,
                detail: None,
            },
            Err(error) if error.is_warning() => Notice {
                level: NoticeLevel::Warning,
                title: MessageId::WarningTitle,
                body: error.message_id(),
                detail: None,
            },
            Err(error) => Notice {
                level: NoticeLevel::Error,
                title: MessageId::ErrorTitle,
                body: error.message_id(),
                detail: error.detail(),
            },
        }
    }

    /// Title and body in `locale` using the bundled catalog.
    pub fn render(&self, locale: &str) -> (String, String) {
        let catalog = MessageCatalog::get();
        let title = catalog.message(locale, self.title).to_string();
        let body = catalog.message(locale, self.body);
        let body = match &self.detail {
            Some(detail) => format!("{} {}", body, detail),
            None => body.to_string(),
        };
        (title, body)
    }
}
