use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

use crate::auth::CredentialRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
    #[serde(default)]
    pub ledger_config: LedgerConfig,
    #[serde(default)]
    pub auth_config: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_provider_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_opening_balance")]
    pub opening_balance: i64,
}

fn default_opening_balance() -> i64 {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_users")]
    pub users: Vec<CredentialRecord>,
}

fn default_users() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord {
            username: "user1".to_string(),
            password: "pass1".to_string(),
        },
        CredentialRecord {
            username: "user2".to_string(),
            password: "pass2".to_string(),
        },
    ]
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_provider_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            opening_balance: default_opening_balance(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_two_users_and_opening_balance() {
        let config = Config::default();
        assert_eq!(config.ledger_config.opening_balance, 100);
        assert_eq!(config.auth_config.users.len(), 2);
        assert_eq!(config.auth_config.users[0].username, "user1");
        assert_eq!(config.auth_config.users[1].password, "pass2");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = "system_config:\n  port: 8080\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.ledger_config.opening_balance, 100);
    }
}
