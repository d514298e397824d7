// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal string rendering for raw integer balances

use num_bigint::{BigInt, Sign};

use crate::TokenDecimals;

/// Render a raw integer balance as a decimal string.
///
/// The magnitude's digits are read as a fixed-point number with `decimals`
/// fractional digits, left-padded so the integer part is never empty.
/// Trailing fractional zeros are trimmed, and the decimal point goes with them
/// when nothing is left. Negative balances get a leading `-`. An absent
/// balance renders as `"0"`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use walletscan::{TokenDecimals, format_token_balance};
///
/// let balance = BigInt::from(1_500_000);
/// assert_eq!(format_token_balance(Some(&balance), TokenDecimals::USDC), "1.5");
///
/// let dust = BigInt::from(-5);
/// assert_eq!(format_token_balance(Some(&dust), TokenDecimals::new(3)), "-0.005");
///
/// assert_eq!(format_token_balance(None, TokenDecimals::STANDARD), "0");
/// ```
pub fn format_token_balance(balance: Option<&BigInt>, decimals: TokenDecimals) -> String {
    let Some(balance) = balance else {
        return "0".to_string();
    };

    let sign = if balance.sign() == Sign::Minus { "-" } else { "" };
    let digits = balance.magnitude().to_string();
    let decimals = decimals.as_u32() as usize;

    if decimals == 0 {
        return format!("{sign}{digits}");
    }

    let padded = if digits.len() <= decimals {
        format!("{}{digits}", "0".repeat(decimals - digits.len() + 1))
    } else {
        digits
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn render(raw: &str, decimals: u32) -> String {
        let balance = BigInt::from_str(raw).unwrap();
        format_token_balance(Some(&balance), TokenDecimals::new(decimals))
    }

    #[test]
    fn test_whole_token() {
        assert_eq!(render("1000000000000000000", 18), "1");
    }

    #[test]
    fn test_full_precision_fraction() {
        assert_eq!(render("1234567890123456789", 18), "1.234567890123456789");
    }

    #[test]
    fn test_left_padding() {
        assert_eq!(render("5", 3), "0.005");
        assert_eq!(render("500", 3), "0.5");
        assert_eq!(render("1", 18), "0.000000000000000001");
    }

    #[test]
    fn test_trailing_zero_trim() {
        assert_eq!(render("1500000", 6), "1.5");
        assert_eq!(render("120000", 4), "12");
    }

    #[test]
    fn test_zero_decimals_is_raw_integer() {
        assert_eq!(render("1500000", 0), "1500000");
        assert_eq!(render("-42", 0), "-42");
    }

    #[test]
    fn test_negative_balances() {
        assert_eq!(render("-1500000", 6), "-1.5");
        assert_eq!(render("-5", 3), "-0.005");
        assert_eq!(render("-1000000000000000000", 18), "-1");
    }

    #[test]
    fn test_zero_always_renders_as_zero() {
        for decimals in [0u32, 1, 6, 18, 77, 255, 300] {
            assert_eq!(render("0", decimals), "0");
        }
        assert_eq!(format_token_balance(None, TokenDecimals::USDC), "0");
    }

    #[test]
    fn test_precision_beyond_uint8() {
        assert_eq!(render("5", 300), format!("0.{}5", "0".repeat(299)));
    }

    #[test]
    fn test_values_beyond_u256() {
        let raw = "1".to_string() + &"0".repeat(90);
        assert_eq!(render(&raw, 18), "1".to_string() + &"0".repeat(72));
    }
}
