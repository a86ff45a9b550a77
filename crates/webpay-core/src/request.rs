//! Attributes sent to WebPay when creating objects.
//!
//! Nothing here is validated locally; WebPay answers malformed input with an
//! `InvalidRequest` or `CardError`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card details as entered by the buyer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInput {
    /// Card number, with or without separators.
    pub number: String,
    /// Expiry month (1-12).
    pub exp_month: u32,
    /// Expiry year (four digits).
    pub exp_year: u32,
    /// Security code.
    pub cvc: String,
    /// Card holder name.
    pub name: String,
}

impl CardInput {
    /// Create card input from its five fields.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        exp_month: u32,
        exp_year: u32,
        cvc: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            exp_month,
            exp_year,
            cvc: cvc.into(),
            name: name.into(),
        }
    }

    /// Last four characters of the number.
    #[must_use]
    pub fn last4(&self) -> &str {
        let start = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map_or(0, |(idx, _)| idx);
        &self.number[start..]
    }
}

// The number and security code must never end up in logs.
impl fmt::Debug for CardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Numbers of four characters or fewer would be shown whole.
        let visible = if self.number.chars().count() > 4 {
            self.last4()
        } else {
            ""
        };
        f.debug_struct("CardInput")
            .field("number", &format_args!("****{visible}"))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &"***")
            .field("name", &self.name)
            .finish()
    }
}

/// Charge currency. WebPay only settles in yen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Japanese yen.
    #[default]
    Jpy,
}

impl Currency {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpy => "jpy",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes for `token.create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateToken {
    /// The card to tokenize.
    pub card: CardInput,
}

/// Attributes for `charge.create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCharge {
    /// Amount in the minor currency unit.
    pub amount: i64,
    /// Charge currency.
    pub currency: Currency,
    /// Token ID to charge.
    pub card: String,
    /// Free-form description.
    pub description: String,
}

impl CreateCharge {
    /// Charge `amount` yen against a token, with an empty description.
    #[must_use]
    pub fn jpy(token_id: impl Into<String>, amount: i64) -> Self {
        Self {
            amount,
            currency: Currency::Jpy,
            card: token_id.into(),
            description: String::new(),
        }
    }
}

/// Attributes for `customer.create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomer {
    /// Token ID whose card becomes the customer's active card.
    pub card: String,
    /// Free-form description.
    pub description: String,
}
