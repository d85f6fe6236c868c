//! Translation engines.
//!
//! - `TranslationEngine`: the contract every provider adapter implements
//! - `deepl`: adapter for the DeepL REST API
//! - `registry`: driver table and the per-name engine singletons

mod deepl;
mod registry;
#[cfg(test)]
pub(crate) mod stub;

pub use deepl::DeepLEngine;
pub use registry::{EngineConstructor, EngineDescriptor, EngineDrivers, EngineRegistry, EngineSettings};

use crate::error::EngineError;
use crate::locale::LocaleMap;
use async_trait::async_trait;

/// A named adapter in front of one external translation provider.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Configured engine key (e.g., "deepl")
    fn name(&self) -> &str;

    /// Locales this engine accepts, stable for the lifetime of the instance.
    fn supported_locales(&self) -> &LocaleMap;

    /// Translate `text` into `target_locale`.
    ///
    /// Exactly one provider call per invocation; failures are returned as
    /// they happen, never retried.
    async fn translate(
        &self,
        text: &str,
        target_locale: &str,
        source_locale: Option<&str>,
    ) -> Result<String, EngineError>;
}
