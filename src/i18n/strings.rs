use crate::i18n::MessageId;

/// All localized user-facing strings for a language
#[derive(Debug, Clone)]
pub struct MessageStrings {
    // ==================== Modal ====================
    /// Action label and modal heading
    pub modal_title: &'static str,

    /// Label of the engine select
    pub engine: &'static str,

    /// Label of the source locale select
    pub source: &'static str,

    /// Label of the target locale select
    pub target: &'static str,

    /// Submit button label
    pub translate: &'static str,

    // ==================== Notifications ====================
    pub success_title: &'static str,
    pub success_message: &'static str,
    pub error_title: &'static str,

    /// Generic failure text; the provider's message is appended after it
    pub error_message: &'static str,

    pub invalid_engine: &'static str,
    pub no_source_text: &'static str,
    pub warning_title: &'static str,
}

impl MessageStrings {
    pub fn get(&self, id: MessageId) -> &'static str {
        match id {
            MessageId::ModalTitle => self.modal_title,
            MessageId::Engine => self.engine,
            MessageId::Source => self.source,
            MessageId::Target => self.target,
            MessageId::Translate => self.translate,
            MessageId::SuccessTitle => self.success_title,
            MessageId::SuccessMessage => self.success_message,
            MessageId::ErrorTitle => self.error_title,
            MessageId::ErrorMessage => self.error_message,
            MessageId::InvalidEngine => self.invalid_engine,
            MessageId::NoSourceText => self.no_source_text,
            MessageId::WarningTitle => self.warning_title,
        }
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: MessageStrings = MessageStrings {
    modal_title: "Translate",
    engine: "Translation Engine",
    source: "Source Language",
    target: "Target Language",
    translate: "Translate",
    success_title: "Translation Successful",
    success_message: "The text has been translated successfully.",
    error_title: "Translation Failed",
    error_message: "There was an error during translation.",
    invalid_engine: "The selected translation engine is invalid.",
    no_source_text: "There is no text in the source language to translate.",
    warning_title: "Nothing to Translate",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: MessageStrings = MessageStrings {
    modal_title: "Traducir",
    engine: "Motor de Traducción",
    source: "Idioma de Origen",
    target: "Idioma de Destino",
    translate: "Traducir",
    success_title: "Traducción Exitosa",
    success_message: "El texto ha sido traducido con éxito.",
    error_title: "Traducción Fallida",
    error_message: "Hubo un error durante la traducción.",
    invalid_engine: "El motor de traducción seleccionado es inválido.",
    no_source_text: "No hay texto en el idioma de origen para traducir.",
    warning_title: "Nada que Traducir",
};

// ==================== Portuguese (Brazil) Strings ====================

pub const PORTUGUESE_BR_STRINGS: MessageStrings = MessageStrings {
    modal_title: "Traduzir",
    engine: "Motor de Tradução",
    source: "Idioma de Origem",
    target: "Idioma de Destino",
    translate: "Traduzir",
    success_title: "Tradução Bem-Sucedida",
    success_message: "O texto foi traduzido com sucesso.",
    error_title: "Tradução Falhou",
    error_message: "Ocorreu um erro durante a tradução.",
    invalid_engine: "O motor de tradução selecionado é inválido.",
    no_source_text: "Não há texto no idioma de origem para traduzir.",
    warning_title: "Nada para Traduzir",
};
