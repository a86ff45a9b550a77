//! Error types for WebPay operations.

use serde::Deserialize;
use std::fmt;

/// Category of a failed WebPay call.
///
/// The first three are the ones the gateway knows how to handle; everything
/// else is surfaced to the caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed, missing, or conflicting parameters (HTTP 400).
    InvalidRequest,
    /// Card data rejected by the issuer or validator (HTTP 402).
    CardError,
    /// Referenced remote object does not exist (HTTP 404).
    NotFound,
    /// The secret key was rejected (HTTP 401).
    Unauthorized,
    /// WebPay failed or answered with an unexpected status.
    Api,
    /// The request never got a usable response (connect, timeout, decode).
    Connection,
}

impl ErrorCategory {
    /// Map an HTTP error status to a category.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Unauthorized,
            402 => Self::CardError,
            404 => Self::NotFound,
            _ => Self::Api,
        }
    }

    /// Name used in log tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "InvalidRequest",
            Self::CardError => "CardError",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::Api => "ApiError",
            Self::Connection => "ApiConnectionError",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized failure returned by a payment client call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{category}: {message}")]
pub struct PaymentError {
    /// Error category.
    pub category: ErrorCategory,
    /// HTTP status code, if a response was received.
    pub status: Option<u16>,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable error code (e.g. `incorrect_number`).
    pub code: Option<String>,
    /// Offending parameter, if any.
    pub param: Option<String>,
    /// Which party caused the error (`buyer`, `insufficient`, `missing`, `service`).
    pub caused_by: Option<String>,
}

impl PaymentError {
    /// Create an error with only a category and message.
    #[must_use]
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            status: None,
            message: message.into(),
            code: None,
            param: None,
            caused_by: None,
        }
    }

    /// Build an error from an HTTP status and an optional WebPay error body.
    #[must_use]
    pub fn from_response(status: u16, body: Option<ErrorBody>) -> Self {
        let category = ErrorCategory::from_status(status);
        match body {
            Some(body) => Self {
                category,
                status: Some(status),
                message: body.message,
                code: body.code,
                param: body.param,
                caused_by: body.caused_by,
            },
            None => Self {
                status: Some(status),
                ..Self::new(category, format!("HTTP {status}"))
            },
        }
    }

    /// Attach an error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the offending parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Attach the HTTP status.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// WebPay error envelope: `{"error": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// The error details.
    pub error: ErrorBody,
}

/// Body of a WebPay error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Error type (`invalid_request_error`, `card_error`, `api_error`).
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Offending parameter.
    #[serde(default)]
    pub param: Option<String>,
    /// Which party caused the error.
    #[serde(default)]
    pub caused_by: Option<String>,
}
