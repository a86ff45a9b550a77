//! The payment gateway.

use std::fmt;

use webpay_client::{PaymentClient, WebPayClient};
use webpay_core::{
    CardInput, Charge, CreateCharge, CreateCustomer, CreateToken, Credential, Customer,
    ErrorCategory, PaymentError, Token,
};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Gateway operation, used to tag log lines and decide which errors are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Card tokenization.
    CreateToken,
    /// Charging a token.
    CreateCharge,
    /// Customer creation.
    CreateCustomer,
}

impl Operation {
    /// Name used in log tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateToken => "create_token",
            Self::CreateCharge => "create_charge",
            Self::CreateCustomer => "create_customer",
        }
    }

    /// Whether errors of `category` are logged and swallowed by this operation.
    ///
    /// `NotFound` is only handled when charging.
    #[must_use]
    pub const fn handles(self, category: ErrorCategory) -> bool {
        matches!(
            (self, category),
            (_, ErrorCategory::InvalidRequest | ErrorCategory::CardError)
                | (Self::CreateCharge, ErrorCategory::NotFound)
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Façade over a [`PaymentClient`].
///
/// The `create_*` methods return `Ok(None)` for the error categories their
/// operation handles (after logging them), and `Err` for everything else.
/// The `try_*` methods forward the call and return the categorized error
/// without logging or swallowing it.
#[derive(Debug, Clone)]
pub struct PaymentGateway<C = WebPayClient> {
    client: C,
    verbose: bool,
}

impl PaymentGateway<WebPayClient> {
    /// Create a gateway talking to the production WebPay API.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is empty or the HTTP client cannot be built.
    pub fn new(credential: impl Into<Credential>, verbose: bool) -> Result<Self, GatewayError> {
        let client = WebPayClient::new(credential)?;
        Ok(Self::with_client(client, verbose))
    }

    /// Create a gateway from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built from the configuration.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client =
            WebPayClient::with_options(config.credential.clone(), config.client.clone())?;
        Ok(Self::with_client(client, config.verbose))
    }
}

impl<C: PaymentClient> PaymentGateway<C> {
    /// Create a gateway around an existing client.
    #[must_use]
    pub fn with_client(client: C, verbose: bool) -> Self {
        Self { client, verbose }
    }

    /// The wrapped client.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Whether successful responses are logged.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Tokenize a card.
    ///
    /// Returns `Ok(None)` on `InvalidRequest` or `CardError`.
    ///
    /// # Errors
    ///
    /// Returns any other payment error unchanged.
    pub async fn create_token(&self, card: &CardInput) -> Result<Option<Token>, PaymentError> {
        let result = self.try_create_token(card).await;
        self.settle(Operation::CreateToken, result)
    }

    /// Charge `amount` yen against a token.
    ///
    /// Returns `Ok(None)` on `InvalidRequest`, `CardError` or `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns any other payment error unchanged.
    pub async fn create_charge(
        &self,
        token_id: &str,
        amount: i64,
    ) -> Result<Option<Charge>, PaymentError> {
        let result = self.try_create_charge(token_id, amount).await;
        self.settle(Operation::CreateCharge, result)
    }

    /// Create a customer from a token.
    ///
    /// Returns `Ok(None)` on `InvalidRequest` or `CardError`.
    ///
    /// # Errors
    ///
    /// Returns any other payment error unchanged, `NotFound` included.
    pub async fn create_customer(
        &self,
        token_id: &str,
        description: &str,
    ) -> Result<Option<Customer>, PaymentError> {
        let result = self.try_create_customer(token_id, description).await;
        self.settle(Operation::CreateCustomer, result)
    }

    /// Tokenize a card, returning every failure.
    ///
    /// # Errors
    ///
    /// Returns the categorized error from the client.
    pub async fn try_create_token(&self, card: &CardInput) -> Result<Token, PaymentError> {
        tracing::debug!(card = ?card, "Creating token");
        self.client
            .token()
            .create(CreateToken { card: card.clone() })
            .await
    }

    /// Charge a token, returning every failure.
    ///
    /// # Errors
    ///
    /// Returns the categorized error from the client.
    pub async fn try_create_charge(
        &self,
        token_id: &str,
        amount: i64,
    ) -> Result<Charge, PaymentError> {
        tracing::debug!(token_id = %token_id, amount, "Creating charge");
        self.client
            .charge()
            .create(CreateCharge::jpy(token_id, amount))
            .await
    }

    /// Create a customer, returning every failure.
    ///
    /// # Errors
    ///
    /// Returns the categorized error from the client.
    pub async fn try_create_customer(
        &self,
        token_id: &str,
        description: &str,
    ) -> Result<Customer, PaymentError> {
        tracing::debug!(token_id = %token_id, "Creating customer");
        self.client
            .customer()
            .create(CreateCustomer {
                card: token_id.to_string(),
                description: description.to_string(),
            })
            .await
    }

    fn settle<T: fmt::Debug>(
        &self,
        operation: Operation,
        result: Result<T, PaymentError>,
    ) -> Result<Option<T>, PaymentError> {
        match result {
            Ok(response) => {
                if self.verbose {
                    tracing::info!(operation = %operation, response = ?response, "WebPay response");
                }
                Ok(Some(response))
            }
            Err(err) if operation.handles(err.category) => {
                tracing::error!(
                    error = %err,
                    code = ?err.code,
                    param = ?err.param,
                    "[ERROR]{} {}",
                    operation,
                    err.category
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
