use crate::locale::{LocaleMap, SourceLocaleStrategy};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Default outbound request timeout for engine calls
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// API key for a translation provider. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// One configured translation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Unique key (e.g., "deepl")
    pub name: String,

    /// Human readable name (e.g., "DeepL")
    #[serde(default)]
    pub display_name: Option<String>,

    /// Implementation reference: name of a registered engine driver
    #[serde(default)]
    pub driver: Option<String>,

    #[serde(default)]
    pub api_key: Option<ApiKey>,

    /// Environment variable to read the API key from when `api_key` is unset
    #[serde(default, skip_serializing)]
    pub api_key_env: Option<String>,

    /// Override of the provider endpoint (base URL)
    #[serde(default)]
    pub api_url: Option<String>,

    /// Locales this engine can translate, in display order
    #[serde(default)]
    pub locales: LocaleMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Engine preselected in the action
    pub default_engine: String,

    /// Engines in configuration order
    pub engines: Vec<EngineConfig>,

    /// Locales offered by the host UI
    #[serde(default)]
    pub languages: LocaleMap,

    /// Preferred source locale, offered first when the engine supports it
    #[serde(default)]
    pub default_source_locale: Option<String>,

    #[serde(default)]
    pub source_locale_strategy: SourceLocaleStrategy,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `FIELD_TRANSLATE_CONFIG` points to a TOML file; without it the
    /// built-in DeepL setup is used with its key read from `DEEPL_API_KEY`.
    /// `TRANSLATE_DEFAULT_ENGINE`, `TRANSLATE_DEFAULT_SOURCE_LOCALE` and
    /// `TRANSLATE_REQUEST_TIMEOUT_SECS` override the loaded values.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("FIELD_TRANSLATE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(&path)?,
            _ => Self::builtin(),
        };

        if let Ok(engine) = std::env::var("TRANSLATE_DEFAULT_ENGINE") {
            config.default_engine = engine;
        }
        if let Ok(locale) = std::env::var("TRANSLATE_DEFAULT_SOURCE_LOCALE") {
            config.default_source_locale = Some(locale).filter(|l| !l.is_empty());
        }
        if let Ok(secs) = std::env::var("TRANSLATE_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = secs
                .parse()
                .context("TRANSLATE_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;
        }

        config.resolve_api_keys();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents).context("Failed to parse TOML config")?;
        config.resolve_api_keys();
        config.validate()?;
        Ok(config)
    }

    /// Built-in setup: DeepL with three locales, keyed by `DEEPL_API_KEY`.
    pub fn builtin() -> Self {
        let mut config = Self {
            default_engine: "deepl".to_string(),
            engines: vec![EngineConfig {
                name: "deepl".to_string(),
                display_name: Some("DeepL".to_string()),
                driver: Some("deepl".to_string()),
                api_key: None,
                api_key_env: Some("DEEPL_API_KEY".to_string()),
                api_url: None,
                locales: [
                    ("en-us", "English (American)"),
                    ("es", "Spanish (Spain)"),
                    ("pt-br", "Portuguese (Brazil)"),
                ]
                .into_iter()
                .collect(),
            }],
            languages: [
                ("en-US", "English (American)"),
                ("es-ES", "Spanish (Spain)"),
                ("pt-BR", "Portuguese (Brazil)"),
            ]
            .into_iter()
            .collect(),
            default_source_locale: Some("pt".to_string()),
            source_locale_strategy: SourceLocaleStrategy::Dynamic,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        config.resolve_api_keys();
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn engine(&self, name: &str) -> Option<&EngineConfig> {
        self.engines.iter().find(|engine| engine.name == name)
    }

    /// Engine keys in configuration order.
    pub fn engine_names(&self) -> Vec<&str> {
        self.engines.iter().map(|engine| engine.name.as_str()).collect()
    }

    /// Fill `api_key` from `api_key_env` where the key is not given inline.
    fn resolve_api_keys(&mut self) {
        for engine in &mut self.engines {
            if engine.api_key.is_some() {
                continue;
            }
            if let Some(var) = &engine.api_key_env {
                engine.api_key = std::env::var(var)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .map(ApiKey::new);
            }
        }
    }

    /// Structural checks only. Driver and API key completeness are checked
    /// when the engine registry is built.
    fn validate(&self) -> Result<()> {
        if self.engines.is_empty() {
            bail!("No translation engines configured");
        }
        for (i, engine) in self.engines.iter().enumerate() {
            if engine.name.trim().is_empty() {
                bail!("Engine #{} has an empty name", i + 1);
            }
            if self.engines[..i].iter().any(|other| other.name == engine.name) {
                bail!("Engine '{}' is configured more than once", engine.name);
            }
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
