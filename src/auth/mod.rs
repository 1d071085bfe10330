pub mod interface;
pub mod store;

pub use interface::{CredentialRecord, CredentialStore};
pub use store::PlaintextStore;
