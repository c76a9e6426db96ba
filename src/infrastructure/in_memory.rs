use crate::domain::ports::TransactionStore;
use crate::domain::transaction::PaymentTransaction;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for transaction records.
///
/// Uses `Arc<RwLock<BTreeMap<String, PaymentTransaction>>>` to allow shared
/// concurrent access. `BTreeMap` keeps ids ordered, so `values` enumerates in
/// key order. The default backend when no database path is configured.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    transactions: Arc<RwLock<BTreeMap<String, PaymentTransaction>>>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty in-memory transaction store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn insert(&self, tx: PaymentTransaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        transactions.insert(tx.id.clone(), tx);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<PaymentTransaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions.get(id).cloned())
    }

    async fn values(&self) -> Result<Vec<PaymentTransaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::Amount;
    use rust_decimal_macros::dec;

    fn tx_with_id(id: &str) -> PaymentTransaction {
        let mut tx = PaymentTransaction::create(
            "alice".to_string(),
            "bob".to_string(),
            Amount::new(dec!(1.0)).unwrap(),
            "USD".to_string(),
            false,
            None,
        );
        tx.id = id.to_string();
        tx
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryTransactionStore::new();
        let tx = tx_with_id("a");

        store.insert(tx.clone()).await.unwrap();
        let retrieved = store.get("a").await.unwrap().unwrap();
        assert_eq!(retrieved, tx);

        assert!(store.get("b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_overwrites_existing_id() {
        let store = InMemoryTransactionStore::new();
        store.insert(tx_with_id("a")).await.unwrap();

        let mut updated = tx_with_id("a");
        updated.set_status("shipped");
        store.insert(updated.clone()).await.unwrap();

        assert_eq!(store.get("a").await.unwrap().unwrap(), updated);
        assert_eq!(store.values().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_values_in_key_order() {
        let store = InMemoryTransactionStore::new();
        for id in ["c", "a", "b"] {
            store.insert(tx_with_id(id)).await.unwrap();
        }

        let ids: Vec<_> = store
            .values()
            .await
            .unwrap()
            .into_iter()
            .map(|tx| tx.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
