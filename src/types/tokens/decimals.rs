//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision
///
/// Number of fractional digits a token's raw integer quantity implicitly
/// encodes. Only used when rendering a balance; arithmetic always happens on
/// the raw integers.
///
/// On-chain decimals are a `uint8`, but indexers report them as free text and
/// nothing stops a token from claiming more. Any non-negative integer that fits
/// in a `u32` is kept as-is. Blank or garbled fields map to zero through
/// [`parse_or_default`](Self::parse_or_default), which renders the raw integer
/// unchanged.
///
/// # Examples
///
/// ```
/// use walletscan::TokenDecimals;
///
/// assert_eq!(TokenDecimals::parse_or_default("6"), TokenDecimals::USDC);
/// assert_eq!(TokenDecimals::parse_or_default("300").as_u32(), 300);
/// assert_eq!(TokenDecimals::parse_or_default("n/a"), TokenDecimals::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u32);

impl TokenDecimals {
    /// No fractional digits; quantities are already in display units
    pub const ZERO: Self = Self(0);

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// Create a new decimal precision value
    pub const fn new(decimals: u32) -> Self {
        Self(decimals)
    }

    /// Get the inner u32 value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Parse a base-10 decimals field, falling back to zero.
    ///
    /// Surrounding whitespace is ignored. Negative numbers, non-numeric text and
    /// values too large for a `u32` all yield [`TokenDecimals::ZERO`].
    pub fn parse_or_default(raw: &str) -> Self {
        raw.trim().parse::<u32>().map(Self).unwrap_or_default()
    }
}

impl From<u32> for TokenDecimals {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_values() {
        assert_eq!(TokenDecimals::parse_or_default("18"), TokenDecimals::STANDARD);
        assert_eq!(TokenDecimals::parse_or_default("8"), TokenDecimals::new(8));
        assert_eq!(TokenDecimals::parse_or_default(" 6 "), TokenDecimals::USDC);
    }

    #[test]
    fn test_parse_keeps_precision_beyond_uint8() {
        assert_eq!(TokenDecimals::parse_or_default("256").as_u32(), 256);
        assert_eq!(TokenDecimals::parse_or_default("300").as_u32(), 300);
    }

    #[test]
    fn test_parse_falls_back_to_zero() {
        assert_eq!(TokenDecimals::parse_or_default(""), TokenDecimals::ZERO);
        assert_eq!(TokenDecimals::parse_or_default("abc"), TokenDecimals::ZERO);
        assert_eq!(TokenDecimals::parse_or_default("-3"), TokenDecimals::ZERO);
        assert_eq!(TokenDecimals::parse_or_default("1.5"), TokenDecimals::ZERO);
        assert_eq!(TokenDecimals::parse_or_default("4294967296"), TokenDecimals::ZERO);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TokenDecimals::USDC).unwrap();
        assert_eq!(json, "6");
        let back: TokenDecimals = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TokenDecimals::USDC);
    }
}
