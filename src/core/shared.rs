use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::account::{Account, Amount};

/// Cloneable handle to an account shared between threads.
///
/// Each operation takes the account's lock for its whole duration, so
/// ledger entries from different handles never interleave mid-operation.
#[derive(Clone)]
pub struct SharedAccount {
    inner: Arc<Mutex<Account>>
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        SharedAccount { inner: Arc::new(Mutex::new(account)) }
    }
}

impl SharedAccount {
    pub fn new(account: Account) -> SharedAccount {
        SharedAccount::from(account)
    }

    // Every mutation is a single push, so a poisoned ledger is still whole.
    fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn deposit(&self, amount: Amount) -> &SharedAccount {
        self.lock().deposit(amount);
        self
    }

    pub fn withdraw(&self, amount: Amount) -> &SharedAccount {
        self.lock().withdraw(amount);
        self
    }

    pub fn request_loan(&self, amount: Amount) -> &SharedAccount {
        self.lock().request_loan(amount);
        self
    }

    /// Runs `f` with exclusive access, for updates that must not be split.
    pub fn with<R>(&self, f: impl FnOnce(&mut Account) -> R) -> R {
        f(&mut self.lock())
    }

    /// Owned copy of the ledger at the time of the call.
    pub fn movements(&self) -> Vec<Amount> {
        self.lock().movements().to_vec()
    }
}
