//! The payment client seam.
//!
//! Each sub-resource mirrors one WebPay endpoint and has a single `create`
//! operation. Failures come back as a categorized [`PaymentError`].

use async_trait::async_trait;
use webpay_core::{
    Charge, CreateCharge, CreateCustomer, CreateToken, Customer, PaymentError, Token,
};

/// A client exposing the `token`, `charge` and `customer` sub-resources.
pub trait PaymentClient: Send + Sync {
    /// Token sub-resource.
    fn token(&self) -> &dyn TokenResource;
    /// Charge sub-resource.
    fn charge(&self) -> &dyn ChargeResource;
    /// Customer sub-resource.
    fn customer(&self) -> &dyn CustomerResource;
}

/// Card tokenization.
#[async_trait]
pub trait TokenResource: Send + Sync {
    /// Tokenize a card.
    async fn create(&self, attributes: CreateToken) -> Result<Token, PaymentError>;
}

/// Charge creation.
#[async_trait]
pub trait ChargeResource: Send + Sync {
    /// Charge a token.
    async fn create(&self, attributes: CreateCharge) -> Result<Charge, PaymentError>;
}

/// Customer creation.
#[async_trait]
pub trait CustomerResource: Send + Sync {
    /// Create a customer from a token.
    async fn create(&self, attributes: CreateCustomer) -> Result<Customer, PaymentError>;
}

impl<T: PaymentClient + ?Sized> PaymentClient for std::sync::Arc<T> {
    fn token(&self) -> &dyn TokenResource {
        (**self).token()
    }

    fn charge(&self) -> &dyn ChargeResource {
        (**self).charge()
    }

    fn customer(&self) -> &dyn CustomerResource {
        (**self).customer()
    }
}
