//! Environment-driven configuration for the `shipcalc` binary.

use std::path::PathBuf;

use rust_decimal::Decimal;

use shipcalc_core::{parse_non_negative, DomainError, DomainResult};
use shipcalc_currency::{CurrencyCode, FixedRateConverter};
use shipcalc_shipping::FlatRateShipping;

pub const CATALOG_VAR: &str = "SHIPCALC_CATALOG";
pub const EXCHANGE_RATE_VAR: &str = "SHIPCALC_EXCHANGE_RATE";
pub const CURRENCY_VAR: &str = "SHIPCALC_CURRENCY";
pub const SHIPPING_BASE_VAR: &str = "SHIPCALC_SHIPPING_BASE";
pub const SHIPPING_PER_KG_VAR: &str = "SHIPCALC_SHIPPING_PER_KG";
pub const SHIPPING_PER_VOLUME_VAR: &str = "SHIPCALC_SHIPPING_PER_VOLUME";

const DEFAULT_CURRENCY: &str = "GBP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    pub catalog_path: PathBuf,
    pub currency: CurrencyCode,
    pub exchange_rate: Decimal,
    pub shipping_base: Decimal,
    pub shipping_per_kg: Decimal,
    pub shipping_per_volume: Decimal,
}

impl QuoteConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Only the catalog path is
    /// required; everything else falls back to a logged default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let catalog_path = lookup(CATALOG_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| DomainError::validation(format!("{CATALOG_VAR} is not set")))?;

        let currency = match lookup(CURRENCY_VAR) {
            Some(raw) => raw.parse::<CurrencyCode>()?,
            None => {
                tracing::warn!("{CURRENCY_VAR} not set; using {DEFAULT_CURRENCY}");
                DEFAULT_CURRENCY.parse::<CurrencyCode>()?
            }
        };

        Ok(Self {
            catalog_path,
            currency,
            exchange_rate: decimal_or(&lookup, EXCHANGE_RATE_VAR, Decimal::ONE)?,
            shipping_base: decimal_or(&lookup, SHIPPING_BASE_VAR, Decimal::ZERO)?,
            shipping_per_kg: decimal_or(&lookup, SHIPPING_PER_KG_VAR, Decimal::ZERO)?,
            shipping_per_volume: decimal_or(&lookup, SHIPPING_PER_VOLUME_VAR, Decimal::ZERO)?,
        })
    }

    pub fn shipping(&self) -> DomainResult<FlatRateShipping> {
        FlatRateShipping::new(
            self.shipping_base,
            self.shipping_per_kg,
            self.shipping_per_volume,
        )
    }

    pub fn converter(&self) -> DomainResult<FixedRateConverter> {
        FixedRateConverter::new(self.currency.clone(), self.exchange_rate)
    }
}

fn decimal_or(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Decimal,
) -> DomainResult<Decimal> {
    match lookup(key) {
        Some(raw) => parse_non_negative(key, &raw),
        None => {
            tracing::warn!("{key} not set; using {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_catalog_is_set() {
        let config = QuoteConfig::from_lookup(lookup_from(&[(CATALOG_VAR, "catalog.json")])).unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("catalog.json"));
        assert_eq!(config.currency.as_str(), "GBP");
        assert_eq!(config.exchange_rate, Decimal::ONE);
        assert_eq!(config.shipping_base, Decimal::ZERO);
    }

    #[test]
    fn reads_every_variable() {
        let config = QuoteConfig::from_lookup(lookup_from(&[
            (CATALOG_VAR, "/tmp/products.json"),
            (CURRENCY_VAR, "EUR"),
            (EXCHANGE_RATE_VAR, "1.17"),
            (SHIPPING_BASE_VAR, "4.99"),
            (SHIPPING_PER_KG_VAR, "0.5"),
            (SHIPPING_PER_VOLUME_VAR, "0.01"),
        ]))
        .unwrap();

        assert_eq!(config.currency.as_str(), "EUR");
        assert_eq!(config.exchange_rate, dec!(1.17));
        assert_eq!(config.shipping_base, dec!(4.99));
        assert_eq!(config.shipping_per_kg, dec!(0.5));
        assert_eq!(config.shipping_per_volume, dec!(0.01));
        assert_eq!(config.converter().unwrap().rate(), dec!(1.17));
        assert!(config.shipping().is_ok());
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let err = QuoteConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, DomainError::validation("SHIPCALC_CATALOG is not set"));
    }

    #[test]
    fn malformed_rate_is_an_error() {
        let err = QuoteConfig::from_lookup(lookup_from(&[
            (CATALOG_VAR, "catalog.json"),
            (EXCHANGE_RATE_VAR, "lots"),
        ]))
        .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains(EXCHANGE_RATE_VAR)),
            _ => panic!("Expected Validation error for malformed rate"),
        }
    }

    #[test]
    fn lowercase_currency_is_rejected() {
        assert!(QuoteConfig::from_lookup(lookup_from(&[
            (CATALOG_VAR, "catalog.json"),
            (CURRENCY_VAR, "eur"),
        ]))
        .is_err());
    }
}
