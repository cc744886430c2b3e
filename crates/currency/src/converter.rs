use core::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shipcalc_core::{non_negative, DomainError, DomainResult, ValueObject};

/// ISO 4217 style currency code (three uppercase ASCII letters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl ValueObject for CurrencyCode {}

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "currency code must be three uppercase letters (got {s:?})"
            )));
        }
        Ok(Self(code.to_string()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts an amount into the target currency.
///
/// Infallible by contract, like shipping: rates are resolved before the
/// converter is handed to the pricing engine.
pub trait CurrencyConverter: Send + Sync {
    fn exchange(&self, amount: Decimal) -> Decimal;
}

impl<T: CurrencyConverter + ?Sized> CurrencyConverter for &T {
    fn exchange(&self, amount: Decimal) -> Decimal {
        (**self).exchange(amount)
    }
}

impl<T: CurrencyConverter + ?Sized> CurrencyConverter for Box<T> {
    fn exchange(&self, amount: Decimal) -> Decimal {
        (**self).exchange(amount)
    }
}

impl<T: CurrencyConverter + ?Sized> CurrencyConverter for Arc<T> {
    fn exchange(&self, amount: Decimal) -> Decimal {
        (**self).exchange(amount)
    }
}

/// Converter with a single fixed exchange rate. Results saturate at
/// `Decimal::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRateConverter {
    target: CurrencyCode,
    rate: Decimal,
}

impl FixedRateConverter {
    pub fn new(target: CurrencyCode, rate: Decimal) -> DomainResult<Self> {
        Ok(Self {
            target,
            rate: non_negative("exchange rate", rate)?,
        })
    }

    /// Amounts are already in the target currency.
    pub fn identity(target: CurrencyCode) -> Self {
        Self {
            target,
            rate: Decimal::ONE,
        }
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl CurrencyConverter for FixedRateConverter {
    fn exchange(&self, amount: Decimal) -> Decimal {
        amount.saturating_mul(self.rate)
    }
}
