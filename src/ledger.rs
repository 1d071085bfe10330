use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Amount should be less than Balance")]
    InsufficientBalance,
}

/// Single shared balance counter. All mutation goes through deposit/withdraw,
/// each an atomic read-modify-write under the mutex.
pub struct Ledger {
    balance: Mutex<i64>,
}

impl Ledger {
    pub fn new(opening_balance: i64) -> Self {
        Self {
            balance: Mutex::new(opening_balance),
        }
    }

    pub async fn balance(&self) -> i64 {
        *self.balance.lock().await
    }

    /// Add a positive amount to the balance
    pub async fn deposit(&self, amount: i64) -> Result<i64, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let mut balance = self.balance.lock().await;
        *balance += amount;
        info!("Deposited {}, balance now {}", amount, *balance);
        Ok(*balance)
    }

    /// Remove a positive amount from the balance, rejecting overdrafts.
    /// The insufficiency check and the subtraction happen under one lock.
    pub async fn withdraw(&self, amount: i64) -> Result<i64, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let mut balance = self.balance.lock().await;
        if amount > *balance {
            return Err(LedgerError::InsufficientBalance);
        }
        *balance -= amount;
        info!("Withdrew {}, balance now {}", amount, *balance);
        Ok(*balance)
    }
}
