//! Utility functions for SQLite storage operations.
//!
//! Monetary amounts are stored as TEXT so they round-trip through
//! `rust_decimal` without binary float drift. These helpers do the
//! conversions in both directions.

use num_traits::Zero;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use shopledger_core::constants::DECIMAL_PRECISION;

/// Parses a stored decimal string, falling back to parsing as f64 for
/// scientific notation. A value that parses neither way logs an error
/// and reads as zero rather than poisoning the whole row.
pub fn parse_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str).ok().and_then(Decimal::from_f64) {
            Some(dec_val) => dec_val,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as Decimal ({}). Falling back to ZERO.",
                    field_name,
                    value_str,
                    e_decimal
                );
                Decimal::zero()
            }
        },
    }
}

/// Parses an optional stored decimal string, preserving NULL.
pub fn parse_decimal_opt(value: Option<&str>, field_name: &str) -> Option<Decimal> {
    value.map(|s| parse_decimal(s, field_name))
}

/// Serializes a decimal for storage, rounded to the stored precision.
pub fn decimal_to_db(value: Decimal) -> String {
    value.round_dp(DECIMAL_PRECISION).to_string()
}

/// Serializes an optional decimal for storage, preserving NULL.
pub fn decimal_opt_to_db(value: Option<Decimal>) -> Option<String> {
    value.map(decimal_to_db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("1000.50", "amount"), dec!(1000.50));
        assert_eq!(parse_decimal("-42", "amount"), dec!(-42));
    }

    #[test]
    fn test_parse_decimal_scientific_notation() {
        assert_eq!(parse_decimal("1e3", "amount"), dec!(1000));
    }

    #[test]
    fn test_parse_decimal_garbage_reads_as_zero() {
        assert_eq!(parse_decimal("not-a-number", "amount"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_decimal_opt_preserves_null() {
        assert_eq!(parse_decimal_opt(None, "amount"), None);
        assert_eq!(parse_decimal_opt(Some("2.5"), "amount"), Some(dec!(2.5)));
    }

    #[test]
    fn test_decimal_to_db_rounds_to_stored_precision() {
        assert_eq!(decimal_to_db(dec!(1.23456789)), "1.234568");
        assert_eq!(decimal_to_db(dec!(100)), "100");
    }
}
