use super::transaction::PaymentTransaction;
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for transaction records.
///
/// An ordered key-value mapping from transaction id to record: point lookup,
/// insert-or-overwrite, and full enumeration in key order. Adapters must be
/// safe to share across request handlers.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Inserts the record under its id, overwriting any previous version.
    async fn insert(&self, tx: PaymentTransaction) -> Result<()>;

    /// Point lookup by id.
    async fn get(&self, id: &str) -> Result<Option<PaymentTransaction>>;

    /// All stored records, in the store's key order.
    async fn values(&self) -> Result<Vec<PaymentTransaction>>;
}

pub type TransactionStoreBox = Box<dyn TransactionStore>;
