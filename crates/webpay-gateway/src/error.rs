//! Gateway construction errors.

use webpay_client::ClientError;

/// Errors raised while configuring or building a gateway.
///
/// Errors of the payment operations themselves are [`webpay_core::PaymentError`].
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The payment client could not be built.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// A secrets file could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A secrets file is not valid JSON.
    #[error("invalid secrets file {path}: {source}")]
    Serialization {
        /// Path of the file.
        path: String,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
