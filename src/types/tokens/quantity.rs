// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw transfer quantity type

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Raw magnitude of a single token transfer (not normalized for decimals)
///
/// Transfers in the source feed are never negative; direction comes from
/// matching sender and receiver against the target address. The value is an
/// unbounded integer so no token supply can overflow it.
///
/// # Examples
///
/// ```
/// use walletscan::TokenQuantity;
///
/// let qty = TokenQuantity::parse("1500000").unwrap();
/// assert_eq!(qty.to_string(), "1500000");
/// assert!(TokenQuantity::parse("1.5").is_none());
/// assert!(TokenQuantity::parse("-10").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenQuantity(BigUint);

impl TokenQuantity {
    /// Create a quantity from an unsigned big integer
    pub fn new(amount: BigUint) -> Self {
        Self(amount)
    }

    /// Zero quantity
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Parse a base-10 integer made only of ASCII digits.
    ///
    /// Surrounding whitespace is ignored. Signs, underscores, decimal points,
    /// hex prefixes and empty strings are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        BigUint::parse_bytes(digits.as_bytes(), 10).map(Self)
    }

    /// Borrow the inner integer
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Signed view for balance arithmetic
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.0.clone())
    }

    /// Whether the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for TokenQuantity {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for TokenQuantity {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for TokenQuantity {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_beyond_u128() {
        let raw = "115792089237316195423570985008687907853269984665640564039457584007913129639935999";
        let qty = TokenQuantity::parse(raw).unwrap();
        assert_eq!(qty.to_string(), raw);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(TokenQuantity::parse(" 42\n"), Some(TokenQuantity::from(42u64)));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        for raw in ["", "   ", "+5", "-5", "1_000", "0x10", "1e18", "12abc", "1.0"] {
            assert!(TokenQuantity::parse(raw).is_none(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_leading_zeros_are_accepted() {
        assert_eq!(TokenQuantity::parse("000100"), Some(TokenQuantity::from(100u64)));
        assert!(TokenQuantity::parse("0").unwrap().is_zero());
    }

    #[test]
    fn test_to_bigint_is_positive() {
        let qty = TokenQuantity::from(u128::MAX);
        assert_eq!(qty.to_bigint().to_string(), u128::MAX.to_string());
    }
}
