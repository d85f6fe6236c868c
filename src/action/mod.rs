//! The translate action: engine selection, source lookup, provider call and
//! write-back, plus the option lists and defaults of its modal.
//!
//! The host UI calls in with the user's choices and gets plain values back
//! (`Result<String, TranslateError>`, `ActionForm`, `Notice`); nothing here
//! renders UI.

mod form;
mod notice;
mod record;

pub use form::{engine_option_label, ActionForm, FormSelection};
pub use notice::{Notice, NoticeLevel};
pub use record::{InMemoryRecord, RecordStore};

use crate::config::Config;
use crate::engine::EngineRegistry;
use crate::error::TranslateError;
use crate::locale::{
    current_field_locale, default_target_locale, source_locale_options, target_locale_options,
    LocaleMap,
};
use tracing::{error, info, warn};

/// One translate call, alive only for its duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub engine: String,
    pub source_locale: Option<String>,
    pub target_locale: String,
    pub text: String,
}

/// Translate `request.text` with the named engine.
///
/// Engine lookup happens first, so an invalid engine is reported even for
/// empty input. Empty text never reaches the provider. Provider failures are
/// returned as `TranslateError::Engine` after a single attempt.
pub async fn translate(
    registry: &EngineRegistry,
    request: &TranslationRequest,
) -> Result<String, TranslateError> {
    let engine = registry.make(&request.engine)?;

    if request.text.trim().is_empty() {
        return Err(TranslateError::EmptySource);
    }

    if let Some(source) = request.source_locale.as_deref() {
        if source.eq_ignore_ascii_case(&request.target_locale) {
            return Err(TranslateError::SameLocale(request.target_locale.clone()));
        }
    }

    info!(
        "Translating {} chars with '{}' ({} -> {})",
        request.text.chars().count(),
        request.engine,
        request.source_locale.as_deref().unwrap_or("auto"),
        request.target_locale
    );

    let translated = engine
        .translate(
            &request.text,
            &request.target_locale,
            request.source_locale.as_deref(),
        )
        .await?;

    Ok(translated)
}

/// The user's submitted choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSubmission {
    pub engine: String,
    pub source_locale: Option<String>,
    pub target_locale: String,
}

/// Translate action attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateAction {
    field: String,
    active_locale: Option<String>,
}

impl TranslateAction {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            active_locale: None,
        }
    }

    /// Locale of the field instance this action belongs to.
    pub fn active_locale(mut self, locale: Option<String>) -> Self {
        self.active_locale = locale;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn field_locale(&self) -> Option<&str> {
        self.active_locale.as_deref()
    }

    /// Options and defaults for the modal, given what the user picked so far.
    ///
    /// An engine that cannot be built offers no locales; the failure is
    /// logged rather than returned so the modal can still open.
    pub fn form(
        &self,
        registry: &EngineRegistry,
        config: &Config,
        record: &dyn RecordStore,
        app_locale: &str,
        selection: &FormSelection,
    ) -> ActionForm {
        let engine = selection
            .engine
            .clone()
            .unwrap_or_else(|| registry.default_engine().to_string());

        let supported = registry.supported_locales(&engine).unwrap_or_else(|e| {
            error!("Failed to load supported locales for engine '{}': {}", engine, e);
            LocaleMap::new()
        });

        let filled = record.filled_locales(&self.field);
        let source_options = source_locale_options(
            config.default_source_locale.as_deref(),
            filled.iter().map(String::as_str),
            &supported,
            config.source_locale_strategy,
        );
        let default_source = source_options.first_code().map(str::to_string);

        let source = selection
            .source_locale
            .as_deref()
            .or(default_source.as_deref());

        let record_locale = record.active_locale();
        let field_locale = current_field_locale(
            record_locale.as_deref(),
            self.active_locale.as_deref(),
            app_locale,
        );

        ActionForm {
            engine_options: registry
                .available_engines()
                .into_iter()
                .map(|name| (name.to_string(), engine_option_label(name)))
                .collect(),
            default_engine: registry.default_engine().to_string(),
            target_options: target_locale_options(&supported, source),
            default_target: default_target_locale(&supported, source, &field_locale),
            source_options,
            default_source,
        }
    }

    /// Run the action against `record`.
    ///
    /// Reads the source text from the record, translates it and stores the
    /// result in the target-locale slot. The record is only written on
    /// success.
    pub async fn execute(
        &self,
        registry: &EngineRegistry,
        record: &mut dyn RecordStore,
        submission: &ActionSubmission,
    ) -> Result<String, TranslateError> {
        if let Err(e) = registry.make(&submission.engine) {
            error!("Translate action on '{}': {}", self.field, e);
            return Err(e);
        }

        let text = submission
            .source_locale
            .as_deref()
            .and_then(|locale| record.localized_value(&self.field, locale))
            .unwrap_or_default();

        let request = TranslationRequest {
            engine: submission.engine.clone(),
            source_locale: submission.source_locale.clone(),
            target_locale: submission.target_locale.clone(),
            text,
        };

        match translate(registry, &request).await {
            Ok(translated) => {
                record.set_localized_value(
                    &self.field,
                    &submission.target_locale,
                    translated.clone(),
                );
                info!(
                    "Translated field '{}' into '{}'",
                    self.field, submission.target_locale
                );
                Ok(translated)
            }
            Err(e) if e.is_warning() => {
                warn!("Translate action on '{}': {}", self.field, e);
                Err(e)
            }
            Err(e) => {
                error!("Translate action on '{}': {}", self.field, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, EngineConfig};
    use crate::engine::stub::{shared_stub_drivers, StubEngine};
    use crate::engine::EngineSettings;
    use crate::error::EngineError;
    use crate::locale::SourceLocaleStrategy;
    use std::sync::Arc;
    use std::time::Duration;

    fn stub_locales() -> LocaleMap {
        [
            ("en-us", "English (American)"),
            ("es", "Spanish (Spain)"),
            ("pt-br", "Portuguese (Brazil)"),
        ]
        .into_iter()
        .collect()
    }

    fn create_test_config() -> Config {
        Config {
            default_engine: "stub".to_string(),
            engines: vec![EngineConfig {
                name: "stub".to_string(),
                display_name: Some("Stub".to_string()),
                driver: Some("stub".to_string()),
                api_key: Some(ApiKey::new("key")),
                api_key_env: None,
                api_url: None,
                locales: stub_locales(),
            }],
            languages: LocaleMap::new(),
            default_source_locale: Some("pt-br".to_string()),
            source_locale_strategy: SourceLocaleStrategy::Dynamic,
            request_timeout_secs: 30,
        }
    }

    fn create_stub() -> Arc<StubEngine> {
        Arc::new(StubEngine::new(&EngineSettings {
            name: "stub".to_string(),
            display_name: "Stub".to_string(),
            api_key: ApiKey::new("key"),
            api_url: None,
            locales: stub_locales(),
            timeout: Duration::from_secs(30),
        }))
    }

    fn create_registry(stub: &Arc<StubEngine>) -> (Config, EngineRegistry) {
        let config = create_test_config();
        let registry = EngineRegistry::with_drivers(&config, shared_stub_drivers(Arc::clone(stub)))
            .expect("valid config");
        (config, registry)
    }

    fn request(text: &str, source: Option<&str>, target: &str) -> TranslationRequest {
        TranslationRequest {
            engine: "stub".to_string(),
            source_locale: source.map(str::to_string),
            target_locale: target.to_string(),
            text: text.to_string(),
        }
    }

    // ==================== translate Tests ====================

    #[tokio::test]
    async fn test_translate_success() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);

        let result = translate(&registry, &request("Olá", Some("pt-br"), "en-us")).await;

        assert_eq!(result, Ok("[en-us] Olá".to_string()));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_translate_empty_source_makes_no_call() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);

        let result = translate(&registry, &request("", Some("pt"), "en-us")).await;

        assert_eq!(result, Err(TranslateError::EmptySource));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_whitespace_is_empty() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);

        let result = translate(&registry, &request(" \n ", None, "en-us")).await;

        assert_eq!(result, Err(TranslateError::EmptySource));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_invalid_engine_checked_first() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);
        let mut req = request("", Some("pt"), "en-us");
        req.engine = "google".to_string();

        let result = translate(&registry, &req).await;

        assert_eq!(result, Err(TranslateError::UnknownEngine("google".to_string())));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_same_locale_rejected() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);

        let result = translate(&registry, &request("Hola", Some("es"), "ES")).await;

        assert!(matches!(result, Err(TranslateError::SameLocale(_))));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_provider_failure_single_attempt() {
        let stub = create_stub();
        stub.fail_with(EngineError::Network("connection reset by peer".to_string()));
        let (_, registry) = create_registry(&stub);

        let result = translate(&registry, &request("Olá", Some("pt-br"), "en-us")).await;

        assert_eq!(
            result,
            Err(TranslateError::Engine(EngineError::Network(
                "connection reset by peer".to_string()
            )))
        );
        assert_eq!(stub.calls(), 1);
    }

    // ==================== execute Tests ====================

    fn submission(source: Option<&str>, target: &str) -> ActionSubmission {
        ActionSubmission {
            engine: "stub".to_string(),
            source_locale: source.map(str::to_string),
            target_locale: target.to_string(),
        }
    }

    #[tokio::test]
    async fn test_execute_writes_back_translation() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);
        let mut record = InMemoryRecord::new().with_value("title", "pt-br", "Olá mundo");
        let action = TranslateAction::new("title");

        let result = action
            .execute(&registry, &mut record, &submission(Some("pt-br"), "es"))
            .await;

        assert_eq!(result, Ok("[es] Olá mundo".to_string()));
        assert_eq!(
            record.localized_value("title", "es").as_deref(),
            Some("[es] Olá mundo")
        );
        assert_eq!(
            record.localized_value("title", "pt-br").as_deref(),
            Some("Olá mundo")
        );
    }

    #[tokio::test]
    async fn test_execute_missing_source_is_warning() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);
        let mut record = InMemoryRecord::new().with_value("title", "pt-br", "Olá");
        let before = record.clone();
        let action = TranslateAction::new("title");

        let result = action
            .execute(&registry, &mut record, &submission(Some("es"), "en-us"))
            .await;

        assert_eq!(result, Err(TranslateError::EmptySource));
        assert_eq!(record, before);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_execute_without_source_locale_is_warning() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);
        let mut record = InMemoryRecord::new().with_value("title", "pt-br", "Olá");
        let action = TranslateAction::new("title");

        let result = action
            .execute(&registry, &mut record, &submission(None, "en-us"))
            .await;

        assert_eq!(result, Err(TranslateError::EmptySource));
    }

    #[tokio::test]
    async fn test_execute_failure_leaves_record_untouched() {
        let stub = create_stub();
        stub.fail_with(EngineError::RateLimited("Too many requests".to_string()));
        let (_, registry) = create_registry(&stub);
        let mut record = InMemoryRecord::new().with_value("title", "pt-br", "Olá");
        let before = record.clone();
        let action = TranslateAction::new("title");

        let result = action
            .execute(&registry, &mut record, &submission(Some("pt-br"), "en-us"))
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.detail().as_deref(), Some("Too many requests"));
        assert_eq!(record, before);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_execute_invalid_engine() {
        let stub = create_stub();
        let (_, registry) = create_registry(&stub);
        let mut record = InMemoryRecord::new().with_value("title", "pt-br", "Olá");
        let action = TranslateAction::new("title");
        let mut submit = submission(Some("pt-br"), "en-us");
        submit.engine = "google".to_string();

        let result = action.execute(&registry, &mut record, &submit).await;

        let notice = Notice::from_result(&result);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.body, crate::i18n::MessageId::InvalidEngine);
        assert_eq!(stub.calls(), 0);
    }

    // ==================== form Tests ====================

    #[test]
    fn test_form_defaults() {
        let stub = create_stub();
        let (config, registry) = create_registry(&stub);
        let record = InMemoryRecord::new()
            .with_value("title", "es", "Hola")
            .with_value("title", "pt-br", "Olá");
        let action = TranslateAction::new("title").active_locale(Some("en-us".to_string()));

        let form = action.form(&registry, &config, &record, "pt-br", &FormSelection::default());

        assert_eq!(
            form.engine_options,
            vec![("stub".to_string(), "STUB".to_string())]
        );
        assert_eq!(form.default_engine, "stub");
        let sources: Vec<&str> = form.source_options.codes().collect();
        assert_eq!(sources, vec!["pt-br", "es"]);
        assert_eq!(form.default_source.as_deref(), Some("pt-br"));
        let targets: Vec<&str> = form.target_options.codes().collect();
        assert_eq!(targets, vec!["en-us", "es"]);
        assert_eq!(form.default_target.as_deref(), Some("en-us"));
    }

    #[test]
    fn test_form_follows_selected_source() {
        let stub = create_stub();
        let (config, registry) = create_registry(&stub);
        let record = InMemoryRecord::new().with_value("title", "es", "Hola");
        let action = TranslateAction::new("title");
        let selection = FormSelection {
            engine: None,
            source_locale: Some("es".to_string()),
        };

        let form = action.form(&registry, &config, &record, "pt", &selection);

        let targets: Vec<&str> = form.target_options.codes().collect();
        assert_eq!(targets, vec!["en-us", "pt-br"]);
        // App locale "pt" only matches by base language
        assert_eq!(form.default_target.as_deref(), Some("pt-br"));
    }

    #[test]
    fn test_form_record_locale_wins() {
        let stub = create_stub();
        let (config, registry) = create_registry(&stub);
        let record = InMemoryRecord::new()
            .with_value("title", "pt-br", "Olá")
            .with_active_locale("es");
        let action = TranslateAction::new("title").active_locale(Some("en-us".to_string()));

        let form = action.form(&registry, &config, &record, "en", &FormSelection::default());

        assert_eq!(form.default_target.as_deref(), Some("es"));
    }

    #[test]
    fn test_form_unknown_engine_offers_no_locales() {
        let stub = create_stub();
        let (config, registry) = create_registry(&stub);
        let record = InMemoryRecord::new().with_value("title", "pt-br", "Olá");
        let action = TranslateAction::new("title");
        let selection = FormSelection {
            engine: Some("google".to_string()),
            source_locale: None,
        };

        let form = action.form(&registry, &config, &record, "en", &selection);

        assert!(form.source_options.is_empty());
        assert!(form.target_options.is_empty());
        assert_eq!(form.default_source, None);
        assert_eq!(form.default_target, None);
    }

    #[test]
    fn test_form_fixed_strategy() {
        let stub = create_stub();
        let (mut config, _) = create_registry(&stub);
        config.source_locale_strategy = SourceLocaleStrategy::Fixed;
        let registry =
            EngineRegistry::with_drivers(&config, shared_stub_drivers(Arc::clone(&stub)))
                .expect("valid config");
        let record = InMemoryRecord::new().with_value("title", "es", "Hola");

        let form = TranslateAction::new("title").form(
            &registry,
            &config,
            &record,
            "en",
            &FormSelection::default(),
        );

        let sources: Vec<&str> = form.source_options.codes().collect();
        assert_eq!(sources, vec!["pt-br"]);
    }

    #[test]
    fn test_engine_option_label() {
        assert_eq!(engine_option_label("deepl"), "DEEPL");
    }
}
