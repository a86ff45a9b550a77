//! Client construction errors.

/// Errors that can occur when building a WebPay client.
///
/// Failures of individual calls are reported as [`webpay_core::PaymentError`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
