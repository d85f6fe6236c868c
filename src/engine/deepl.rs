use crate::config::ApiKey;
use crate::engine::{EngineSettings, TranslationEngine};
use crate::error::EngineError;
use crate::locale::LocaleMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEEPL_API_URL: &str = "https://api.deepl.com";
const DEEPL_FREE_API_URL: &str = "https://api-free.deepl.com";

/// DeepL returns 456 when the account's character quota is used up
const STATUS_QUOTA_EXCEEDED: u16 = 456;

/// DeepL `/v2/translate` request body
#[derive(Debug, Serialize)]
struct DeepLRequest<'a> {
    text: Vec<&'a str>,
    target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct DeepLErrorBody {
    message: String,
}

pub struct DeepLEngine {
    name: String,
    client: reqwest::Client,
    endpoint: String,
    api_key: ApiKey,
    locales: LocaleMap,
    timeout: Duration,
}

impl DeepLEngine {
    pub fn new(settings: &EngineSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| EngineError::Client(e.to_string()))?;

        let base_url = settings
            .api_url
            .clone()
            .unwrap_or_else(|| default_base_url(&settings.api_key).to_string());

        Ok(Self {
            name: settings.name.clone(),
            client,
            endpoint: format!("{}/v2/translate", base_url.trim_end_matches('/')),
            api_key: settings.api_key.clone(),
            locales: settings.locales.clone(),
            timeout: settings.timeout,
        })
    }

    fn request_error(&self, error: reqwest::Error) -> EngineError {
        if error.is_timeout() {
            EngineError::Timeout(self.timeout)
        } else {
            EngineError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl TranslationEngine for DeepLEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_locales(&self) -> &LocaleMap {
        &self.locales
    }

    async fn translate(
        &self,
        text: &str,
        target_locale: &str,
        source_locale: Option<&str>,
    ) -> Result<String, EngineError> {
        let request = DeepLRequest {
            text: vec![text],
            target_lang: target_lang_code(target_locale),
            source_lang: source_locale.map(source_lang_code),
        };

        debug!(
            "DeepL request: {} chars, {:?} -> {}",
            text.chars().count(),
            request.source_lang,
            request.target_lang
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                "Authorization",
                format!("DeepL-Auth-Key {}", self.api_key.expose()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(error_for_status(status, &body));
        }

        let parsed: DeepLResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                EngineError::Timeout(self.timeout)
            } else {
                EngineError::InvalidResponse(format!("Failed to parse DeepL response: {}", e))
            }
        })?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|translation| translation.text)
            .ok_or_else(|| {
                EngineError::InvalidResponse("DeepL response contained no translations".to_string())
            })
    }
}

/// Free-plan keys carry a ":fx" suffix and use a separate host.
fn default_base_url(api_key: &ApiKey) -> &'static str {
    if api_key.expose().ends_with(":fx") {
        DEEPL_FREE_API_URL
    } else {
        DEEPL_API_URL
    }
}

/// Target codes keep their region ("pt-br" -> "PT-BR").
fn target_lang_code(locale: &str) -> String {
    locale.replace('_', "-").to_ascii_uppercase()
}

/// Source codes are base languages only ("pt-br" -> "PT").
fn source_lang_code(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_uppercase()
}

fn error_for_status(status: reqwest::StatusCode, body: &str) -> EngineError {
    let message = serde_json::from_str::<DeepLErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| body.trim().to_string());
    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no message from provider")
            .to_string()
    } else {
        message
    };

    match status.as_u16() {
        403 => EngineError::Unauthorized(message),
        429 => EngineError::RateLimited(message),
        STATUS_QUOTA_EXCEEDED => EngineError::QuotaExceeded(message),
        code @ 400..=499 => EngineError::Rejected {
            status: code,
            message,
        },
        code => EngineError::Provider {
            status: code,
            message,
        },
    }
}
