//! Value object trait and decimal helpers shared by value constructors.

use core::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects have no identity: two parcels with the same weight and volume
/// are the same parcel. They are immutable; "changing" one means building a
/// new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Reject negative amounts (prices, weights, volumes, rates).
pub fn non_negative(field: &str, value: Decimal) -> DomainResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::validation(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(value)
}

/// Parse a non-negative decimal from user input (env vars, CLI arguments).
pub fn parse_non_negative(field: &str, raw: &str) -> DomainResult<Decimal> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|e| DomainError::validation(format!("{field}: {raw:?} is not a decimal: {e}")))?;
    non_negative(field, value)
}
