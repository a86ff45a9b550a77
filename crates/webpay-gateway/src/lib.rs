//! WebPay payment gateway.
//!
//! A thin façade over a [`PaymentClient`] with three operations: tokenize a
//! card, charge a token, and create a customer. Known failure categories are
//! logged and turned into `Ok(None)`; anything else is returned to the caller
//! untouched.
//!
//! # Example
//!
//! ```no_run
//! use webpay_gateway::{CardInput, PaymentGateway};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = PaymentGateway::new("test_secret_...", false)?;
//!
//! let card = CardInput::new("4242-4242-4242-4242", 8, 2029, "123", "M O");
//! if let Some(token) = gateway.create_token(&card).await? {
//!     gateway.create_charge(&token.id, 200).await?;
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod gateway;

pub use config::{GatewayConfig, API_KEY_ENV};
pub use error::GatewayError;
pub use gateway::{Operation, PaymentGateway};

pub use webpay_client::{ClientOptions, PaymentClient, WebPayClient};
pub use webpay_core::{
    CardInput, Charge, Credential, Customer, ErrorCategory, PaymentError, Token,
};
