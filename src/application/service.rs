use crate::domain::ports::TransactionStoreBox;
use crate::domain::transaction::{Amount, PaymentTransaction};
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer};

/// Rejection message for malformed create requests. One combined message
/// covers every violation, matching the public API text.
const CREATE_INPUT_MSG: &str = "Invalid input. 'sender', 'recipient', 'amount', and 'currency' \
     are required fields, and 'amount' must be a positive number";

/// Create request body. Every field is optional at the wire level so that
/// presence checks are part of validation rather than deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub escrow: Option<bool>,
    #[serde(default)]
    pub escrow_release_condition: Option<String>,
}

/// Status-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatus {
    #[serde(default)]
    pub status: Option<String>,
}

/// Escrow-release request body. `conditionMet` is a three-state optional:
/// absent, false and true are all distinct and observable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseEscrow {
    #[serde(default)]
    pub condition_met: Option<bool>,
}

/// Accepts any JSON value for `amount` and keeps only numbers, so that a
/// non-numeric amount is rejected by validation with the combined create
/// message instead of failing body deserialization.
fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_f64).and_then(Decimal::from_f64))
}

/// The record-keeping service for payment transactions.
///
/// Owns the storage backend behind the `TransactionStore` port and implements
/// the five operations of the API. Validation always precedes any store
/// mutation, so a failed request never leaves a partial write behind.
pub struct TransactionService {
    store: TransactionStoreBox,
}

impl TransactionService {
    pub fn new(store: TransactionStoreBox) -> Self {
        Self { store }
    }

    /// Creates a new transaction record with a fresh id and `pending` status.
    pub async fn create(&self, cmd: CreateTransaction) -> Result<PaymentTransaction> {
        let invalid = || LedgerError::InvalidInput(CREATE_INPUT_MSG.to_string());

        let sender = cmd.sender.filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let recipient = cmd.recipient.filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let currency = cmd.currency.filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let amount = cmd
            .amount
            .and_then(|value| Amount::new(value).ok())
            .ok_or_else(invalid)?;

        let tx = PaymentTransaction::create(
            sender,
            recipient,
            amount,
            currency,
            cmd.escrow.unwrap_or(false),
            cmd.escrow_release_condition,
        );
        tracing::info!(id = %tx.id, "transaction created");

        self.store.insert(tx.clone()).await?;
        Ok(tx)
    }

    /// All stored records, in the store's key order.
    pub async fn list_all(&self) -> Result<Vec<PaymentTransaction>> {
        self.store.values().await
    }

    /// Point lookup by id.
    pub async fn get_by_id(&self, id: &str) -> Result<PaymentTransaction> {
        self.require(id).await
    }

    /// Replaces the status of an existing transaction.
    pub async fn update_status(&self, id: &str, cmd: UpdateStatus) -> Result<PaymentTransaction> {
        let status = cmd
            .status
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LedgerError::InvalidInput("Status is a required field".to_string()))?;

        let mut tx = self.require(id).await?;
        tx.set_status(&status);
        self.store.insert(tx.clone()).await?;
        Ok(tx)
    }

    /// Releases a held escrow transaction once its condition is confirmed.
    ///
    /// A false `conditionMet` leaves the record untouched; only a true value
    /// completes the transaction.
    pub async fn release_escrow(&self, id: &str, cmd: ReleaseEscrow) -> Result<PaymentTransaction> {
        let condition_met = cmd.condition_met.ok_or_else(|| {
            LedgerError::InvalidInput("ConditionMet is a required field".to_string())
        })?;

        let mut tx = self.require(id).await?;
        if !tx.escrow {
            return Err(LedgerError::NotEscrow(id.to_string()));
        }
        if !condition_met {
            return Err(LedgerError::ConditionNotMet);
        }

        tx.release_escrow();
        tracing::info!(id = %tx.id, "escrow released");
        self.store.insert(tx.clone()).await?;
        Ok(tx)
    }

    async fn require(&self, id: &str) -> Result<PaymentTransaction> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }
}
