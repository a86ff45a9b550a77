//! Common test utilities for gateway integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing_subscriber::fmt::MakeWriter;

use webpay_client::{ChargeResource, CustomerResource, PaymentClient, TokenResource};
use webpay_core::{
    Card, CardInput, Charge, CreateCharge, CreateCustomer, CreateToken, Customer, ErrorCategory,
    PaymentError, Token,
};

/// A valid test card.
pub fn valid_card() -> CardInput {
    CardInput::new("4242-4242-4242-4242", 8, 2029, "123", "M O")
}

/// A card whose number is too short to be accepted.
pub fn short_number_card() -> CardInput {
    CardInput::new("4242", 8, 2029, "123", "M O")
}

/// A card with no security code.
pub fn missing_cvc_card() -> CardInput {
    CardInput::new("4242-4242-4242-4242", 8, 2029, "", "M O")
}

#[derive(Default)]
struct State {
    tokens: HashMap<String, Token>,
    next_id: u32,
    charges: Vec<CreateCharge>,
    customers: Vec<CreateCustomer>,
}

/// In-memory stand-in for WebPay.
///
/// Tokens are issued for 16-digit card numbers, consumed by one charge or
/// customer, and unknown tokens are rejected the way WebPay rejects them.
/// A fake built with [`FakeWebPay::failing`] answers every call with the
/// given category instead.
#[derive(Default)]
pub struct FakeWebPay {
    state: Mutex<State>,
    failure: Option<ErrorCategory>,
}

impl FakeWebPay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(category: ErrorCategory) -> Self {
        Self {
            state: Mutex::default(),
            failure: Some(category),
        }
    }

    /// Charge attributes received so far.
    pub fn charges(&self) -> Vec<CreateCharge> {
        self.state.lock().unwrap().charges.clone()
    }

    /// Customer attributes received so far.
    pub fn customers(&self) -> Vec<CreateCustomer> {
        self.state.lock().unwrap().customers.clone()
    }

    fn forced_failure(&self) -> Result<(), PaymentError> {
        match self.failure {
            Some(category) => Err(PaymentError::new(category, "forced failure")),
            None => Ok(()),
        }
    }

    /// Take an unused token, marking it used.
    fn consume(state: &mut State, token_id: &str) -> Option<Token> {
        let token = state.tokens.get_mut(token_id)?;
        if token.used {
            return None;
        }
        token.used = true;
        Some(token.clone())
    }

    fn next_id(state: &mut State, prefix: &str) -> String {
        state.next_id += 1;
        format!("{prefix}_{:015}", state.next_id)
    }
}

#[async_trait]
impl TokenResource for FakeWebPay {
    async fn create(&self, attributes: CreateToken) -> Result<Token, PaymentError> {
        self.forced_failure()?;
        let card = attributes.card;

        if card.number.is_empty() {
            return Err(PaymentError::new(ErrorCategory::InvalidRequest, "Missing number")
                .with_param("number"));
        }
        if card.cvc.is_empty() {
            return Err(PaymentError::new(ErrorCategory::InvalidRequest, "Missing cvc")
                .with_param("cvc"));
        }

        let digits: String = card.number.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 16 {
            return Err(
                PaymentError::new(ErrorCategory::CardError, "Your card number is incorrect")
                    .with_code("incorrect_number")
                    .with_param("number"),
            );
        }

        let mut state = self.state.lock().unwrap();
        let token = Token {
            id: Self::next_id(&mut state, "tok"),
            livemode: false,
            created: None,
            used: false,
            card: Some(Card {
                last4: digits[12..].to_string(),
                exp_month: card.exp_month,
                exp_year: card.exp_year,
                name: Some(card.name),
                brand: Some("Visa".into()),
                country: Some("JP".into()),
                fingerprint: Some(format!("fp_{}", &digits[12..])),
                cvc_check: Some("pass".into()),
            }),
        };
        state.tokens.insert(token.id.clone(), token.clone());
        Ok(token)
    }
}

#[async_trait]
impl ChargeResource for FakeWebPay {
    async fn create(&self, attributes: CreateCharge) -> Result<Charge, PaymentError> {
        self.forced_failure()?;
        let mut state = self.state.lock().unwrap();
        state.charges.push(attributes.clone());

        if attributes.amount <= 0 {
            return Err(PaymentError::new(ErrorCategory::InvalidRequest, "Invalid amount")
                .with_param("amount"));
        }

        let token = Self::consume(&mut state, &attributes.card).ok_or_else(|| {
            PaymentError::new(
                ErrorCategory::NotFound,
                format!("No such token: {}", attributes.card),
            )
            .with_param("card")
        })?;

        Ok(Charge {
            id: Self::next_id(&mut state, "ch"),
            amount: attributes.amount,
            amount_refunded: 0,
            currency: attributes.currency.as_str().to_string(),
            description: Some(attributes.description),
            paid: true,
            captured: true,
            refunded: false,
            failure_message: None,
            customer: None,
            card: token.card,
            created: None,
            livemode: false,
        })
    }
}

#[async_trait]
impl CustomerResource for FakeWebPay {
    async fn create(&self, attributes: CreateCustomer) -> Result<Customer, PaymentError> {
        self.forced_failure()?;
        let mut state = self.state.lock().unwrap();
        state.customers.push(attributes.clone());

        let token = Self::consume(&mut state, &attributes.card).ok_or_else(|| {
            PaymentError::new(
                ErrorCategory::InvalidRequest,
                format!("Invalid token: {}", attributes.card),
            )
            .with_param("card")
        })?;

        Ok(Customer {
            id: Self::next_id(&mut state, "cus"),
            description: Some(attributes.description),
            email: None,
            active_card: token.card,
            created: None,
            livemode: false,
        })
    }
}

impl PaymentClient for FakeWebPay {
    fn token(&self) -> &dyn TokenResource {
        self
    }

    fn charge(&self) -> &dyn ChargeResource {
        self
    }

    fn customer(&self) -> &dyn CustomerResource {
        self
    }
}

/// Captures formatted log output for the current thread.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Install a subscriber writing into this buffer until the guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Everything logged so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines containing `needle`.
    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(String::from)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
