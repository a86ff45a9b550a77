//! WebPay response objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Masked card attached to tokens, charges and customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Last four digits.
    #[serde(default)]
    pub last4: String,
    /// Expiry month.
    #[serde(default)]
    pub exp_month: u32,
    /// Expiry year.
    #[serde(default)]
    pub exp_year: u32,
    /// Card holder name.
    #[serde(default)]
    pub name: Option<String>,
    /// Card brand (e.g. "Visa").
    #[serde(rename = "type", default)]
    pub brand: Option<String>,
    /// Issuing country.
    #[serde(default)]
    pub country: Option<String>,
    /// Stable fingerprint of the card number.
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Result of the security code check (`pass`, `fail`, `unchecked`).
    #[serde(default)]
    pub cvc_check: Option<String>,
}

/// Single-use reference to tokenized card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token ID (`tok_...`).
    pub id: String,
    /// Whether created with a live key.
    #[serde(default)]
    pub livemode: bool,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Whether the token has already been consumed.
    #[serde(default)]
    pub used: bool,
    /// The tokenized card.
    #[serde(default)]
    pub card: Option<Card>,
}

/// A debit against a tokenized card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge ID (`ch_...`).
    pub id: String,
    /// Amount in the minor currency unit.
    pub amount: i64,
    /// Amount refunded so far.
    #[serde(default)]
    pub amount_refunded: i64,
    /// Currency (always "jpy").
    pub currency: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the payment went through.
    #[serde(default)]
    pub paid: bool,
    /// Whether the charge was captured.
    #[serde(default)]
    pub captured: bool,
    /// Whether the charge was fully refunded.
    #[serde(default)]
    pub refunded: bool,
    /// Reason the charge failed, if it did.
    #[serde(default)]
    pub failure_message: Option<String>,
    /// Customer ID, when charged through a customer.
    #[serde(default)]
    pub customer: Option<String>,
    /// The charged card.
    #[serde(default)]
    pub card: Option<Card>,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Whether created with a live key.
    #[serde(default)]
    pub livemode: bool,
}

/// Remote record binding a card to descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID (`cus_...`).
    pub id: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Card registered from the token.
    #[serde(default)]
    pub active_card: Option<Card>,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Whether created with a live key.
    #[serde(default)]
    pub livemode: bool,
}
