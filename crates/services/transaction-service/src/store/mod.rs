//! Transaction storage.
//!
//! The only mutable collection in the system. Appends and reads go through
//! an async `RwLock`, so concurrent handlers never observe a torn list.

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::Transaction;

/// Append-only transaction log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Record a transaction and return it as stored.
    async fn append(&self, transaction: Transaction) -> Transaction;

    /// List transactions in insertion order.
    async fn list(&self) -> Vec<Transaction>;
}

/// Transactions held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: RwLock::new(transactions),
        }
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn append(&self, transaction: Transaction) -> Transaction {
        self.transactions.write().await.push(transaction.clone());
        transaction
    }

    async fn list(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }
}
