//! Account storage.

use async_trait::async_trait;

use domain::Account;

/// Read-only access to accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// List every account.
    async fn list(&self) -> Vec<Account>;
}

/// Accounts held in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: Vec<Account>,
}

impl InMemoryAccountStore {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Store seeded with the demo accounts.
    pub fn with_sample_data() -> Self {
        Self::new(sample_accounts())
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn list(&self) -> Vec<Account> {
        self.accounts.clone()
    }
}

/// Demo accounts served by the account service.
pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new("ACC-1001", 2500.0, "USD"),
        Account::new("ACC-1002", 1200.5, "EUR"),
    ]
}
