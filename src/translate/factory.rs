use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::TranslatorConfig;
use super::client::RemoteTranslator;
use super::interface::Translator;

/// Factory for creating translator clients
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator based on configuration
    ///
    /// # Arguments
    /// * `config` - Translator configuration (provider URL, timeout)
    ///
    /// # Returns
    /// Shared Translator implementation
    pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn Translator>> {
        info!("Initializing translator: base_url={}", config.base_url);

        let client = RemoteTranslator::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Arc::new(client))
    }
}
