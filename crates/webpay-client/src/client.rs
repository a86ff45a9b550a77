//! WebPay REST client implementation.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use webpay_core::{
    Charge, CreateCharge, CreateCustomer, CreateToken, Credential, Customer, ErrorCategory,
    ErrorEnvelope, PaymentError, Token,
};

use crate::error::ClientError;
use crate::form::{self, FormParams};
use crate::resource::{ChargeResource, CustomerResource, PaymentClient, TokenResource};

/// WebPay API client.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct WebPayClient {
    tokens: Tokens,
    charges: Charges,
    customers: Customers,
}

impl WebPayClient {
    /// Create a client for the production WebPay API.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is empty or the HTTP client cannot be built.
    pub fn new(credential: impl Into<Credential>) -> Result<Self, ClientError> {
        Self::with_options(credential, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential or base URL is empty, or the HTTP
    /// client cannot be built.
    pub fn with_options(
        credential: impl Into<Credential>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let credential = credential.into();
        if credential.is_empty() {
            return Err(ClientError::Configuration("API key is empty".into()));
        }

        let base_url = options.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base URL is empty".into()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        tracing::debug!(
            base_url = %base_url,
            credential = %credential,
            timeout_seconds = options.timeout_seconds,
            "WebPay client configured"
        );

        let transport = Arc::new(Transport {
            http,
            base_url,
            credential,
        });

        Ok(Self {
            tokens: Tokens(Arc::clone(&transport)),
            charges: Charges(Arc::clone(&transport)),
            customers: Customers(transport),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.tokens.0.base_url
    }
}

impl PaymentClient for WebPayClient {
    fn token(&self) -> &dyn TokenResource {
        &self.tokens
    }

    fn charge(&self) -> &dyn ChargeResource {
        &self.charges
    }

    fn customer(&self) -> &dyn CustomerResource {
        &self.customers
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL (default: `https://api.webpay.jp/v1`).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl ClientOptions {
    /// Production WebPay API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.webpay.jp/v1";

    /// Create options pointing at another base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug)]
struct Transport {
    http: Client,
    base_url: String,
    credential: Credential,
}

impl Transport {
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &FormParams,
    ) -> Result<T, PaymentError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(url = %url, "Sending WebPay request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.credential.expose())
            .header(ACCEPT, "application/json")
            .form(params)
            .send()
            .await
            .map_err(connection_error)?;

        handle_response(response).await
    }
}

/// Handle API response and convert errors.
async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, PaymentError> {
    let status = response.status();

    if status.is_success() {
        return response.json().await.map_err(connection_error);
    }

    // The body is usually a WebPay error envelope, but proxies may answer with anything
    let envelope: Option<ErrorEnvelope> = response.json().await.ok();
    let err = PaymentError::from_response(status.as_u16(), envelope.map(|e| e.error));

    tracing::debug!(
        status = status.as_u16(),
        category = %err.category,
        code = ?err.code,
        param = ?err.param,
        "WebPay request failed"
    );

    Err(err)
}

fn connection_error(err: reqwest::Error) -> PaymentError {
    let category_err = PaymentError::new(ErrorCategory::Connection, err.to_string());
    match err.status() {
        Some(status) => category_err.with_status(status.as_u16()),
        None => category_err,
    }
}

#[derive(Debug, Clone)]
struct Tokens(Arc<Transport>);

#[async_trait]
impl TokenResource for Tokens {
    async fn create(&self, attributes: CreateToken) -> Result<Token, PaymentError> {
        self.0.post("/tokens", &form::token_params(&attributes)).await
    }
}

#[derive(Debug, Clone)]
struct Charges(Arc<Transport>);

#[async_trait]
impl ChargeResource for Charges {
    async fn create(&self, attributes: CreateCharge) -> Result<Charge, PaymentError> {
        self.0.post("/charges", &form::charge_params(&attributes)).await
    }
}

#[derive(Debug, Clone)]
struct Customers(Arc<Transport>);

#[async_trait]
impl CustomerResource for Customers {
    async fn create(&self, attributes: CreateCustomer) -> Result<Customer, PaymentError> {
        self.0
            .post("/customers", &form::customer_params(&attributes))
            .await
    }
}
