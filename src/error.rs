use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors produced by the transaction record service.
///
/// The first four variants map directly to request-level failures; `Internal`
/// wraps storage and serialization faults that are not the client's doing.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Transaction with ID={0} not found")]
    NotFound(String),
    #[error("Transaction with ID={0} is not an escrow transaction")]
    NotEscrow(String),
    #[error("Escrow release condition not met")]
    ConditionNotMet,
    #[error("Internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(Box::new(err))
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for LedgerError {
    fn from(err: rocksdb::Error) -> Self {
        Self::Internal(Box::new(err))
    }
}
