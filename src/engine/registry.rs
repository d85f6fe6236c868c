//! Engine registry: maps configured engine names to engine instances.
//!
//! The "implementation reference" of each configured engine names a driver
//! in an explicit `EngineDrivers` table. Every entry is validated when the
//! registry is built, so a bad configuration fails at startup instead of on
//! the first translate request. Instances are constructed lazily, at most
//! once per name, under a mutex.

use crate::config::{ApiKey, Config, EngineConfig};
use crate::engine::{DeepLEngine, TranslationEngine};
use crate::error::{EngineError, TranslateError};
use crate::locale::LocaleMap;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info};

/// Everything a driver needs to construct one engine instance.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub name: String,
    pub display_name: String,
    pub api_key: ApiKey,
    pub api_url: Option<String>,
    pub locales: LocaleMap,
    pub timeout: Duration,
}

/// Constructor for one driver.
pub type EngineConstructor = Arc<
    dyn Fn(&EngineSettings) -> Result<Arc<dyn TranslationEngine>, EngineError> + Send + Sync,
>;

/// Table of known engine drivers, keyed by driver name.
#[derive(Clone)]
pub struct EngineDrivers {
    constructors: HashMap<String, EngineConstructor>,
}

impl EngineDrivers {
    /// A table with no drivers at all.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Drivers shipped with this crate: `deepl`.
    pub fn builtin() -> Self {
        Self::empty().with("deepl", |settings| {
            let engine: Arc<dyn TranslationEngine> = Arc::new(DeepLEngine::new(settings)?);
            Ok(engine)
        })
    }

    /// Register (or replace) a driver.
    pub fn register<F>(&mut self, driver: impl Into<String>, constructor: F)
    where
        F: Fn(&EngineSettings) -> Result<Arc<dyn TranslationEngine>, EngineError>
            + Send
            + Sync
            + 'static,
    {
        self.constructors.insert(driver.into(), Arc::new(constructor));
    }

    pub fn with<F>(mut self, driver: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&EngineSettings) -> Result<Arc<dyn TranslationEngine>, EngineError>
            + Send
            + Sync
            + 'static,
    {
        self.register(driver, constructor);
        self
    }

    pub fn contains(&self, driver: &str) -> bool {
        self.constructors.contains_key(driver)
    }

    fn get(&self, driver: &str) -> Option<&EngineConstructor> {
        self.constructors.get(driver)
    }
}

impl Default for EngineDrivers {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A validated engine entry: which driver to use and with what settings.
#[derive(Debug, Clone)]
pub struct EngineDescriptor {
    pub driver: String,
    pub settings: EngineSettings,
}

impl EngineDescriptor {
    fn from_config(
        engine: &EngineConfig,
        drivers: &EngineDrivers,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let misconfigured = |reason: String| TranslateError::MisconfiguredEngine {
            engine: engine.name.clone(),
            reason,
        };

        let driver = engine
            .driver
            .as_deref()
            .map(str::trim)
            .filter(|driver| !driver.is_empty())
            .ok_or_else(|| misconfigured("missing driver (implementation reference)".to_string()))?;

        if !drivers.contains(driver) {
            return Err(misconfigured(format!("unknown driver '{}'", driver)));
        }

        let api_key = engine
            .api_key
            .clone()
            .filter(|key| !key.is_blank())
            .ok_or_else(|| misconfigured("missing api_key".to_string()))?;

        Ok(Self {
            driver: driver.to_string(),
            settings: EngineSettings {
                name: engine.name.clone(),
                display_name: engine
                    .display_name
                    .clone()
                    .unwrap_or_else(|| engine.name.clone()),
                api_key,
                api_url: engine.api_url.clone(),
                locales: engine.locales.clone(),
                timeout,
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn display_name(&self) -> &str {
        &self.settings.display_name
    }

    pub fn locales(&self) -> &LocaleMap {
        &self.settings.locales
    }
}

pub struct EngineRegistry {
    default_engine: String,
    descriptors: Vec<EngineDescriptor>,
    drivers: EngineDrivers,
    instances: Mutex<HashMap<String, Arc<dyn TranslationEngine>>>,
}

impl EngineRegistry {
    /// Build a registry with the built-in drivers.
    pub fn new(config: &Config) -> Result<Self, TranslateError> {
        Self::with_drivers(config, EngineDrivers::builtin())
    }

    /// Build a registry, validating every configured engine.
    ///
    /// Fails with `MisconfiguredEngine` when an entry lacks a known driver or
    /// an API key, and with `UnknownEngine` when the default engine is not
    /// among the configured ones.
    pub fn with_drivers(config: &Config, drivers: EngineDrivers) -> Result<Self, TranslateError> {
        let timeout = config.request_timeout();
        let descriptors = config
            .engines
            .iter()
            .map(|engine| EngineDescriptor::from_config(engine, &drivers, timeout))
            .collect::<Result<Vec<_>, _>>()?;

        if !descriptors
            .iter()
            .any(|descriptor| descriptor.name() == config.default_engine)
        {
            return Err(TranslateError::UnknownEngine(config.default_engine.clone()));
        }

        info!(
            "Translation engines configured: {} (default: {})",
            descriptors
                .iter()
                .map(|descriptor| descriptor.name())
                .collect::<Vec<_>>()
                .join(", "),
            config.default_engine
        );

        Ok(Self {
            default_engine: config.default_engine.clone(),
            descriptors,
            drivers,
            instances: Mutex::new(HashMap::new()),
        })
    }

    /// The engine instance for `name`, constructed on first use.
    ///
    /// Repeated calls return the same instance.
    pub fn make(&self, name: &str) -> Result<Arc<dyn TranslationEngine>, TranslateError> {
        let descriptor = self
            .descriptor(name)
            .ok_or_else(|| TranslateError::UnknownEngine(name.to_string()))?;

        // Held across construction so concurrent first use builds one instance
        let mut instances = self
            .instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(engine) = instances.get(name) {
            debug!("Reusing translation engine '{}'", name);
            return Ok(Arc::clone(engine));
        }

        let constructor = self.drivers.get(&descriptor.driver).ok_or_else(|| {
            TranslateError::MisconfiguredEngine {
                engine: name.to_string(),
                reason: format!("unknown driver '{}'", descriptor.driver),
            }
        })?;

        let engine = constructor(&descriptor.settings).map_err(|e| {
            TranslateError::MisconfiguredEngine {
                engine: name.to_string(),
                reason: format!("construction failed: {}", e),
            }
        })?;

        info!(
            "Constructed translation engine '{}' (driver: {})",
            name, descriptor.driver
        );
        instances.insert(name.to_string(), Arc::clone(&engine));
        Ok(engine)
    }

    /// Construct every configured engine now instead of on first use.
    pub fn warm_up(&self) -> Result<(), TranslateError> {
        for descriptor in &self.descriptors {
            self.make(descriptor.name())?;
        }
        Ok(())
    }

    /// Configured engine keys, in configuration order.
    pub fn available_engines(&self) -> Vec<&str> {
        self.descriptors
            .iter()
            .map(|descriptor| descriptor.name())
            .collect()
    }

    pub fn default_engine(&self) -> &str {
        &self.default_engine
    }

    pub fn descriptor(&self, name: &str) -> Option<&EngineDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.name() == name)
    }

    /// Locales the named engine supports.
    pub fn supported_locales(&self, name: &str) -> Result<LocaleMap, TranslateError> {
        Ok(self.make(name)?.supported_locales().clone())
    }
}
