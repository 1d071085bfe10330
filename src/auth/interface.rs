/// Credential store interface - comparison strategy lives in the implementation

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
}

/// Read-only directory of credential records, seeded once at startup
pub trait CredentialStore: Send + Sync {
    /// Check a username/password pair against the stored record
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Look up the stored record for a username
    fn get(&self, username: &str) -> Option<CredentialRecord>;
}
