//! Checkout hand-off.
//!
//! Payment capture happens entirely outside this backend: the gateway trait
//! is the seam where the hosted payment provider attaches. The backend only
//! submits the final `{offer, amount, currency}` triple and relays the
//! provider's reference back to the caller.

use crate::api::{CheckoutOrder, CheckoutReceipt};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Errors surfaced by a checkout submission.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout rejected: {reason}")]
    Rejected { reason: String },

    #[error("payment provider unavailable")]
    Unavailable,
}

/// External payment collaborator.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Submit an order for capture and return the provider reference.
    async fn submit(&self, order: &CheckoutOrder) -> Result<CheckoutReceipt, CheckoutError>;
}

/// Gateway that records submissions in memory and issues local references.
///
/// Used in development and tests, and as the default wiring until a real
/// provider integration is configured.
#[derive(Default)]
pub struct RecordingGateway {
    submitted: Mutex<Vec<CheckoutOrder>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders submitted so far, oldest first.
    pub fn submitted(&self) -> Vec<CheckoutOrder> {
        self.submitted.lock().clone()
    }
}

#[async_trait]
impl CheckoutGateway for RecordingGateway {
    async fn submit(&self, order: &CheckoutOrder) -> Result<CheckoutReceipt, CheckoutError> {
        if order.amount <= 0 {
            return Err(CheckoutError::Rejected {
                reason: format!("non-positive amount {}", order.amount),
            });
        }

        self.submitted.lock().push(order.clone());

        Ok(CheckoutReceipt {
            reference: uuid::Uuid::new_v4().to_string(),
            offer_id: order.offer_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            accepted_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(amount: i64) -> CheckoutOrder {
        CheckoutOrder {
            offer_id: "offer-123".to_string(),
            amount,
            currency: "USD".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submission_is_recorded() {
        let gateway = RecordingGateway::new();
        let receipt = gateway.submit(&order(54_756)).await.unwrap();

        assert_eq!(receipt.offer_id, "offer-123");
        assert_eq!(receipt.amount, 54_756);
        assert!(!receipt.reference.is_empty());
        assert_eq!(gateway.submitted().len(), 1);
    }

    #[tokio::test]
    async fn test_references_are_unique() {
        let gateway = RecordingGateway::new();
        let a = gateway.submit(&order(100)).await.unwrap();
        let b = gateway.submit(&order(100)).await.unwrap();
        assert_ne!(a.reference, b.reference);
    }

    #[tokio::test]
    async fn test_non_positive_amount_rejected() {
        let gateway = RecordingGateway::new();
        let err = gateway.submit(&order(0)).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Rejected { .. }));
        assert!(gateway.submitted().is_empty());
    }
}
