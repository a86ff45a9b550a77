//! WebPay client.
//!
//! This crate defines the [`PaymentClient`] trait the gateway talks to, and
//! [`WebPayClient`], its implementation over the WebPay v1 REST API.
//!
//! # Example
//!
//! ```no_run
//! use webpay_client::{PaymentClient, WebPayClient};
//! use webpay_core::{CardInput, CreateToken};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebPayClient::new("test_secret_...")?;
//!
//! let token = client
//!     .token()
//!     .create(CreateToken {
//!         card: CardInput::new("4242-4242-4242-4242", 8, 2029, "123", "M O"),
//!     })
//!     .await?;
//!
//! println!("Created token {}", token.id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod form;
mod resource;

pub use client::{ClientOptions, WebPayClient};
pub use error::ClientError;
pub use resource::{ChargeResource, CustomerResource, PaymentClient, TokenResource};
