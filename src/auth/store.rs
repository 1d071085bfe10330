use std::collections::HashMap;

use super::interface::{CredentialRecord, CredentialStore};

/// In-memory store with plaintext password comparison
pub struct PlaintextStore {
    users: HashMap<String, CredentialRecord>,
}

impl PlaintextStore {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.username.clone(), record))
            .collect();
        Self { users }
    }
}

impl CredentialStore for PlaintextStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .map(|record| record.password == password)
            .unwrap_or(false)
    }

    fn get(&self, username: &str) -> Option<CredentialRecord> {
        self.users.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PlaintextStore {
        PlaintextStore::new(vec![CredentialRecord {
            username: "user1".to_string(),
            password: "pass1".to_string(),
        }])
    }

    #[test]
    fn verify_matches_stored_password() {
        let store = store();
        assert!(store.verify("user1", "pass1"));
        assert!(!store.verify("user1", "wrong"));
        assert!(!store.verify("missing", "pass1"));
    }

    #[test]
    fn get_returns_record_verbatim() {
        let store = store();
        let record = store.get("user1").unwrap();
        assert_eq!(record.username, "user1");
        assert_eq!(record.password, "pass1");
        assert!(store.get("missing").is_none());
    }
}
