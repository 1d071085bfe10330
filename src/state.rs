use std::sync::Arc;

use anyhow::Result;

use crate::auth::{CredentialStore, PlaintextStore};
use crate::config::Config;
use crate::ledger::Ledger;
use crate::translate::{Translator, TranslatorFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub credentials: Arc<dyn CredentialStore>,
    pub ledger: Arc<Ledger>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let translator = TranslatorFactory::create_translator(&config.translator_config)?;
        Ok(Self::with_translator(config, translator))
    }

    /// Build state around an already-constructed translator
    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        let credentials = Arc::new(PlaintextStore::new(config.auth_config.users.clone()));
        let ledger = Arc::new(Ledger::new(config.ledger_config.opening_balance));

        Self {
            config,
            credentials,
            ledger,
            translator,
        }
    }
}
