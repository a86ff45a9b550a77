//! Core types for the WebPay gateway.
//!
//! This crate provides the types shared by the client and the gateway:
//!
//! - **Credential**: `Credential`, the merchant secret key
//! - **Inputs**: `CardInput`, `CreateToken`, `CreateCharge`, `CreateCustomer`
//! - **Responses**: `Token`, `Charge`, `Customer`, `Card`
//! - **Errors**: `PaymentError`, `ErrorCategory`
//!
//! # Amounts
//!
//! Amounts are integers in the minor currency unit. Every charge is made in
//! Japanese yen, which has no minor unit, so `200` means 200 JPY.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod credential;
pub mod error;
pub mod request;
pub mod response;

pub use credential::Credential;
pub use error::{ErrorBody, ErrorCategory, ErrorEnvelope, PaymentError};
pub use request::{CardInput, CreateCharge, CreateCustomer, CreateToken, Currency};
pub use response::{Card, Charge, Customer, Token};
