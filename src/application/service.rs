use std::future::Future;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Rate;

use super::AppError;

/// A rate below this magnitude would blow up the reciprocal, so it is
/// rejected before normalization.
pub const MINIMUM_ALLOWED_RATE: f64 = 1e-8;

const CURRENCY_CODE_PATTERN: &str = "^[a-zA-Z][a-zA-Z0-9]{2}$";

static CURRENCY_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn currency_code_regex() -> &'static Regex {
    CURRENCY_CODE_REGEX
        .get_or_init(|| Regex::new(CURRENCY_CODE_PATTERN).expect("currency code pattern compiles"))
}

/// Storage contract the exchange service depends on. Rates handed to
/// `save_rate` are always in canonical form, and lookups are always keyed by
/// the canonical pair. Replace-on-save and any concurrency policy belong to
/// the implementation.
pub trait RateStore {
    fn save_rate(&self, rate: &Rate) -> impl Future<Output = Result<(), AppError>> + Send;
    fn rate(
        &self,
        code_from: &str,
        code_to: &str,
    ) -> impl Future<Output = Result<Rate, AppError>> + Send;
}

/// Application service for storing exchange rates and converting amounts.
/// This is the primary interface for any client (CLI, API, TUI, etc.).
pub struct ExchangeService<S: RateStore> {
    store: S,
}

impl<S: RateStore> ExchangeService<S> {
    /// Create a new exchange service over the given rate store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store, for operations outside the exchange
    /// contract (listing, maintenance).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate a currency code: exactly three characters, an ASCII letter
    /// followed by two letters or digits, case-insensitive.
    pub fn validate_currency_code(&self, code: &str) -> Result<(), AppError> {
        match code.len() {
            0 => return Err(AppError::CodeIsEmpty),
            1 | 2 => return Err(AppError::CodeTooShort),
            3 => {}
            _ => return Err(AppError::CodeTooLong),
        }
        if !currency_code_regex().is_match(code) {
            return Err(AppError::CodeFormat);
        }
        Ok(())
    }

    /// Store a rate for a currency pair, replacing any previous value.
    /// The pair is normalized into canonical lexicographic order first; a
    /// reversed pair is stored as its reciprocal.
    pub async fn set_rate(&self, rate: Rate) -> Result<(), AppError> {
        // Checked against the value as given, before any reciprocation.
        if rate.value < MINIMUM_ALLOWED_RATE {
            return Err(AppError::RateIsCloseToZero);
        }
        if rate.code_from == rate.code_to {
            return Err(AppError::RateCodesAreSame);
        }
        self.validate_currency_code(&rate.code_from)?;
        self.validate_currency_code(&rate.code_to)?;

        let rate = rate.into_canonical();
        self.store.save_rate(&rate).await
    }

    /// Convert `amount` from one currency to another using the stored rate
    /// for the pair (or its reciprocal when the pair is reversed).
    pub async fn exchange(
        &self,
        code_from: &str,
        code_to: &str,
        amount: f64,
    ) -> Result<f64, AppError> {
        if amount < 0.0 {
            return Err(AppError::NegativeAmount);
        }
        // Zero converts to zero in any currency, even a malformed one.
        if amount == 0.0 {
            return Ok(0.0);
        }
        self.validate_currency_code(code_from)?;
        self.validate_currency_code(code_to)?;

        if code_from == code_to {
            return Ok(amount);
        }

        let (code_from, code_to, reversed) = if code_from > code_to {
            (code_to, code_from, true)
        } else {
            (code_from, code_to, false)
        };

        let rate = self.store.rate(code_from, code_to).await?;

        if reversed {
            Ok(amount / rate.value)
        } else {
            Ok(amount * rate.value)
        }
    }
}
