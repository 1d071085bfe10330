use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::interface::{TranslateRequest, TranslateResponse, Translator};

/// Translator client that communicates with the remote provider service
#[derive(Debug, Clone)]
pub struct RemoteTranslator {
    client: Client,
    base_url: String,
}

impl RemoteTranslator {
    /// Create a new translator client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the provider service
    /// * `timeout` - Upper bound on the whole provider round-trip
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        let url = format!("{}/translate", self.base_url);
        let request = TranslateRequest {
            text: text.to_string(),
            source_lang: None, // provider auto-detects
            target_lang: target_lang.to_string(),
        };

        debug!("Sending translate request: target_lang={}", target_lang);

        let response = self.client.post(&url).json(&request).send().await?;
        let result: TranslateResponse = response.json().await?;

        if !result.success {
            return Err(anyhow!("provider reported failure"));
        }
        Ok(result.translated_text)
    }
}
