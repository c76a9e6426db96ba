use crate::domain::ports::TransactionStore;
use crate::domain::transaction::PaymentTransaction;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing transaction records.
pub const CF_TRANSACTIONS: &str = "transactions";

/// A persistent store implementation using RocksDB.
///
/// Records are JSON-encoded under their id in the `transactions` Column
/// Family. RocksDB keeps keys in byte order, so `values` enumerates records in
/// lexicographic id order, and the store survives process restarts.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_transactions = ColumnFamilyDescriptor::new(CF_TRANSACTIONS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_transactions])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_TRANSACTIONS).ok_or_else(|| {
            LedgerError::Internal(Box::new(std::io::Error::other(
                "Transactions column family not found",
            )))
        })
    }
}

#[async_trait]
impl TransactionStore for RocksDBStore {
    async fn insert(&self, tx: PaymentTransaction) -> Result<()> {
        let cf = self.cf()?;
        let value = serde_json::to_vec(&tx)?;
        self.db.put_cf(cf, tx.id.as_bytes(), value)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<PaymentTransaction>> {
        let cf = self.cf()?;
        match self.db.get_cf(cf, id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn values(&self) -> Result<Vec<PaymentTransaction>> {
        let cf = self.cf()?;
        let mut transactions = Vec::new();

        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            transactions.push(serde_json::from_slice(&value)?);
        }

        Ok(transactions)
    }
}
