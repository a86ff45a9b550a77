//! Merchant secret key.

use serde::Deserialize;
use std::fmt;

/// Secret key authenticating requests to WebPay.
///
/// The key is immutable once built and never printed: `Debug` and `Display`
/// show only the key prefix (`test_secret_` or `live_secret_`).
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    const TEST_PREFIX: &'static str = "test_secret_";
    const LIVE_PREFIX: &'static str = "live_secret_";

    /// Wrap a secret key.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Return the raw secret, for building the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the secret is empty (or only whitespace).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Whether this is a test-mode key.
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        self.0.starts_with(Self::TEST_PREFIX)
    }

    fn visible_prefix(&self) -> &'static str {
        if self.0.starts_with(Self::TEST_PREFIX) {
            Self::TEST_PREFIX
        } else if self.0.starts_with(Self::LIVE_PREFIX) {
            Self::LIVE_PREFIX
        } else {
            ""
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({}****)", self.visible_prefix())
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}****", self.visible_prefix())
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self(secret.to_string())
    }
}
