use crate::error::LedgerError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Initial status of every new transaction.
pub const STATUS_PENDING: &str = "pending";
/// Status a transaction reaches when its escrow is released.
pub const STATUS_COMPLETED: &str = "completed";

/// Represents a positive monetary amount.
///
/// Wrapper around `rust_decimal::Decimal` so that an amount can only be
/// constructed from a value strictly greater than zero. Serializes as a plain
/// JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, LedgerError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::InvalidInput(
                "'amount' must be a positive number".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A single payment transaction record.
///
/// The record is the sole entity of the service: created once, mutated only by
/// the status-update and escrow-release operations, never deleted. Every
/// mutation appends one entry to `transaction_history` and refreshes
/// `updated_at`; `id`, `created_at` and `amount` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    pub id: String,
    pub sender: String,
    pub recipient: String,
    pub amount: Amount,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub transaction_history: Vec<String>,
    pub escrow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escrow_release_condition: Option<String>,
}

impl PaymentTransaction {
    /// Builds a fresh record with a server-generated id and `pending` status.
    ///
    /// A release condition is only retained for escrow transactions; one
    /// supplied alongside `escrow = false` is dropped.
    pub fn create(
        sender: String,
        recipient: String,
        amount: Amount,
        currency: String,
        escrow: bool,
        escrow_release_condition: Option<String>,
    ) -> Self {
        let transaction_history = vec![format!("Transaction created by {sender}")];
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            recipient,
            amount,
            currency,
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
            updated_at: None,
            transaction_history,
            escrow,
            escrow_release_condition: if escrow { escrow_release_condition } else { None },
        }
    }

    /// Overwrites the status and records the change in the audit trail.
    ///
    /// Status values are free text; `completed` is not terminal.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.updated_at = Some(Utc::now());
        self.transaction_history
            .push(format!("Status updated to {status}"));
    }

    /// Marks the escrow as released and the transaction as completed.
    pub fn release_escrow(&mut self) {
        self.status = STATUS_COMPLETED.to_string();
        self.updated_at = Some(Utc::now());
        self.transaction_history.push("Escrow released".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample(escrow: bool, condition: Option<&str>) -> PaymentTransaction {
        PaymentTransaction::create(
            "alice".to_string(),
            "bob".to_string(),
            Amount::new(dec!(10.0)).unwrap(),
            "USD".to_string(),
            escrow,
            condition.map(str::to_string),
        )
    }

    #[test]
    fn test_amount_rejects_zero_and_negative() {
        assert!(Amount::new(dec!(0)).is_err());
        assert!(Amount::new(dec!(-5.0)).is_err());
        assert_eq!(Amount::new(dec!(0.0001)).unwrap().value(), dec!(0.0001));
    }

    #[test]
    fn test_create_defaults() {
        let tx = sample(false, None);
        assert_eq!(tx.status, STATUS_PENDING);
        assert!(tx.updated_at.is_none());
        assert_eq!(tx.transaction_history, vec!["Transaction created by alice"]);
        assert!(!tx.escrow);
        assert!(tx.escrow_release_condition.is_none());
    }

    #[test]
    fn test_create_drops_condition_without_escrow() {
        let tx = sample(false, Some("delivery"));
        assert!(tx.escrow_release_condition.is_none());

        let tx = sample(true, Some("delivery"));
        assert_eq!(tx.escrow_release_condition.as_deref(), Some("delivery"));
    }

    #[test]
    fn test_set_status_appends_history() {
        let mut tx = sample(false, None);
        tx.set_status("shipped");
        assert_eq!(tx.status, "shipped");
        assert!(tx.updated_at.is_some());
        assert_eq!(
            tx.transaction_history,
            vec!["Transaction created by alice", "Status updated to shipped"]
        );
    }

    #[test]
    fn test_release_escrow_completes() {
        let mut tx = sample(true, Some("delivery"));
        tx.release_escrow();
        assert_eq!(tx.status, STATUS_COMPLETED);
        assert_eq!(
            tx.transaction_history,
            vec!["Transaction created by alice", "Escrow released"]
        );
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let tx = sample(true, Some("delivery"));
        let json = serde_json::to_value(&tx).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("transactionHistory").is_some());
        assert_eq!(json["escrowReleaseCondition"], "delivery");
        // updatedAt is absent, not null, until the first mutation
        assert!(json.get("updatedAt").is_none());
        assert!(json["amount"].is_number());
    }
}
