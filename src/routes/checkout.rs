//! Checkout endpoint data types.

use serde::{Deserialize, Serialize};

/// The final order handed to the payment collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOrder {
    /// Identifier of the quoted offer being purchased
    pub offer_id: String,
    /// Total price in the platform base currency, rounded
    pub amount: i64,
    /// Settlement currency chosen at checkout
    pub currency: String,
}

/// Acknowledgement from the payment collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Provider reference for tracking the capture
    pub reference: String,
    pub offer_id: String,
    pub amount: i64,
    pub currency: String,
    pub accepted_at: chrono::DateTime<chrono::Utc>,
}

pub const SUBMIT_CHECKOUT: &str = "submit_checkout";
