//! Gateway configuration.

use serde::Deserialize;
use std::path::Path;

use webpay_client::ClientOptions;
use webpay_core::Credential;

use crate::error::GatewayError;

/// Environment variable holding the WebPay secret key.
pub const API_KEY_ENV: &str = "WEBPAY_API_KEY";

/// Secrets file locations tried by [`GatewayConfig::load`], in order.
const SECRET_PATHS: [&str; 2] = [".secrets/webpay.json", "../.secrets/webpay.json"];

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// WebPay secret key.
    pub credential: Credential,

    /// Log every successful response (default: false).
    pub verbose: bool,

    /// HTTP client options.
    pub client: ClientOptions,
}

/// WebPay secrets file structure.
#[derive(Debug, Deserialize)]
struct WebPaySecrets {
    api_key: Credential,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    timeout_seconds: Option<u64>,
    #[serde(default)]
    verbose: bool,
}

impl From<WebPaySecrets> for GatewayConfig {
    fn from(secrets: WebPaySecrets) -> Self {
        let defaults = ClientOptions::default();
        Self {
            credential: secrets.api_key,
            verbose: secrets.verbose,
            client: ClientOptions {
                base_url: secrets.base_url.unwrap_or(defaults.base_url),
                timeout_seconds: secrets.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            },
        }
    }
}

impl GatewayConfig {
    /// Configuration with default client options and verbose logging off.
    #[must_use]
    pub fn new(credential: impl Into<Credential>) -> Self {
        Self {
            credential: credential.into(),
            verbose: false,
            client: ClientOptions::default(),
        }
    }

    /// Load configuration from a secrets file, falling back to `WEBPAY_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if a secrets file exists but cannot be parsed, or if
    /// neither a secrets file nor the environment variable provides a key.
    pub fn load() -> Result<Self, GatewayError> {
        Self::resolve(&SECRET_PATHS, std::env::var(API_KEY_ENV).ok())
    }

    /// Load configuration from a specific secrets file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds an empty key.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GatewayError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|source| GatewayError::Io {
            path: shown.clone(),
            source,
        })?;
        let secrets: WebPaySecrets =
            serde_json::from_str(&contents).map_err(|source| GatewayError::Serialization {
                path: shown.clone(),
                source,
            })?;

        if secrets.api_key.is_empty() {
            return Err(GatewayError::Configuration(format!(
                "api_key is empty in {shown}"
            )));
        }

        tracing::info!(path = %shown, "Loaded WebPay secrets from file");
        Ok(secrets.into())
    }

    fn resolve<P: AsRef<Path>>(
        paths: &[P],
        env_key: Option<String>,
    ) -> Result<Self, GatewayError> {
        for path in paths {
            if path.as_ref().exists() {
                return Self::from_file(path);
            }
        }

        tracing::debug!("WebPay secrets file not found, using environment variables");
        match env_key {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(GatewayError::Configuration(format!(
                "no secrets file found and {API_KEY_ENV} is not set"
            ))),
        }
    }
}
