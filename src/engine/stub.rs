//! In-process engine for unit tests.

use crate::engine::{EngineDrivers, EngineSettings, TranslationEngine};
use crate::error::EngineError;
use crate::locale::LocaleMap;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Answers `"[<target>] <text>"`, or the queued failure if one is set.
pub struct StubEngine {
    name: String,
    locales: LocaleMap,
    calls: AtomicUsize,
    failure: Mutex<Option<EngineError>>,
}

impl StubEngine {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            name: settings.name.clone(),
            locales: settings.locales.clone(),
            calls: AtomicUsize::new(0),
            failure: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, error: EngineError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationEngine for StubEngine {
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
        _source_locale: Option<&str>,
    ) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(format!("[{}] {}", target_locale, text))
    }
}

/// A driver table with a counting `stub` driver.
pub fn stub_drivers() -> (EngineDrivers, Arc<AtomicUsize>) {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);
    let drivers = EngineDrivers::empty().with("stub", move |settings| {
        counter.fetch_add(1, Ordering::SeqCst);
        let engine: Arc<dyn TranslationEngine> = Arc::new(StubEngine::new(settings));
        Ok(engine)
    });
    (drivers, constructed)
}

/// A driver table whose `stub` driver always hands out `engine`.
pub fn shared_stub_drivers(engine: Arc<StubEngine>) -> EngineDrivers {
    EngineDrivers::empty().with("stub", move |_| {
        let engine: Arc<dyn TranslationEngine> = engine.clone();
        Ok(engine)
    })
}
