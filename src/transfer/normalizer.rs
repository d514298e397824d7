// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer normalization: alias resolution into a canonical record

use crate::{RawTransfer, TokenDecimals, TokenQuantity, TransferError};

use super::aliases;

/// A transfer row with every field resolved
///
/// Immutable once built. Addresses are kept exactly as the indexer sent them;
/// comparisons against a wallet are case-insensitive and happen in the
/// aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTransfer {
    contract_address: String,
    display_name: String,
    display_symbol: String,
    decimals: TokenDecimals,
    quantity: TokenQuantity,
    from: String,
    to: String,
}

impl CanonicalTransfer {
    /// Build a transfer with no token metadata.
    ///
    /// The display name defaults to the contract address and the symbol to
    /// empty, exactly as [`normalize`] would resolve a row without them.
    pub fn new(
        contract_address: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        quantity: TokenQuantity,
    ) -> Self {
        let contract_address = contract_address.into();
        Self {
            display_name: contract_address.clone(),
            contract_address,
            display_symbol: String::new(),
            decimals: TokenDecimals::ZERO,
            quantity,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Replace the token metadata.
    ///
    /// An empty name falls back to the symbol, then to the contract address.
    pub fn with_metadata(
        mut self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: TokenDecimals,
    ) -> Self {
        let name = name.into();
        let symbol = symbol.into();
        self.display_name = if !name.is_empty() {
            name
        } else if !symbol.is_empty() {
            symbol.clone()
        } else {
            self.contract_address.clone()
        };
        self.display_symbol = symbol;
        self.decimals = decimals;
        self
    }

    /// Token contract address; the aggregation key
    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    /// Display name; never empty unless the contract address itself is empty
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Display symbol; may be empty
    pub fn display_symbol(&self) -> &str {
        &self.display_symbol
    }

    /// Decimal precision used when rendering
    pub fn decimals(&self) -> TokenDecimals {
        self.decimals
    }

    /// Transferred magnitude
    pub fn quantity(&self) -> &TokenQuantity {
        &self.quantity
    }

    /// Sender address
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Receiver address
    pub fn to(&self) -> &str {
        &self.to
    }
}

impl TryFrom<&RawTransfer> for CanonicalTransfer {
    type Error = TransferError;

    fn try_from(raw: &RawTransfer) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}

/// Resolve a raw row into a [`CanonicalTransfer`].
///
/// Name resolves through the name aliases, then the symbol aliases, then the
/// contract address. Symbol resolves through its aliases only. Decimals fall
/// back to zero when absent or unparseable. A missing or unparseable quantity
/// is the only failure and makes the row unusable; the error carries the
/// row's transaction hash when it has one.
pub fn normalize(raw: &RawTransfer) -> Result<CanonicalTransfer, TransferError> {
    let contract_address = text_or_empty(raw, aliases::CONTRACT_ADDRESS);
    let tx_hash = || raw.first_text(aliases::TX_HASH).map(|hash| hash.into_owned());

    let quantity_text = raw.first_text(aliases::QUANTITY).ok_or_else(|| {
        TransferError::missing_quantity(contract_address.as_str()).with_tx_hash(tx_hash())
    })?;
    let quantity = TokenQuantity::parse(&quantity_text).ok_or_else(|| {
        TransferError::malformed_quantity(contract_address.as_str(), quantity_text.to_string())
            .with_tx_hash(tx_hash())
    })?;

    let display_symbol = text_or_empty(raw, aliases::TOKEN_SYMBOL);
    let display_name = raw
        .first_text(aliases::TOKEN_NAME)
        .map(|name| name.into_owned())
        .unwrap_or_else(|| {
            if display_symbol.is_empty() {
                contract_address.clone()
            } else {
                display_symbol.clone()
            }
        });

    let decimals = raw
        .first_text(aliases::TOKEN_DECIMALS)
        .map(|text| TokenDecimals::parse_or_default(&text))
        .unwrap_or_default();

    Ok(CanonicalTransfer {
        contract_address,
        display_name,
        display_symbol,
        decimals,
        quantity,
        from: text_or_empty(raw, aliases::FROM),
        to: text_or_empty(raw, aliases::TO),
    })
}

fn text_or_empty(raw: &RawTransfer, aliases: &[&str]) -> String {
    raw.first_text(aliases)
        .map(|text| text.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    fn raw(value: serde_json::Value) -> RawTransfer {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_primary_fields() {
        let transfer = normalize(&raw(json!({
            "contractAddress": USDC,
            "tokenName": "USD Coin",
            "tokenSymbol": "USDC",
            "tokenDecimal": "6",
            "value": "1500000",
            "from": "0x1111111111111111111111111111111111111111",
            "to": "0x2222222222222222222222222222222222222222",
            "hash": "0xfeed",
        })))
        .unwrap();

        assert_eq!(transfer.contract_address(), USDC);
        assert_eq!(transfer.display_name(), "USD Coin");
        assert_eq!(transfer.display_symbol(), "USDC");
        assert_eq!(transfer.decimals(), TokenDecimals::USDC);
        assert_eq!(transfer.quantity(), &TokenQuantity::from(1_500_000u64));
        assert_eq!(transfer.from(), "0x1111111111111111111111111111111111111111");
        assert_eq!(transfer.to(), "0x2222222222222222222222222222222222222222");
    }

    #[test]
    fn test_alternate_cased_fields() {
        let transfer = normalize(&raw(json!({
            "contractAddress": USDC,
            "TokenName": "USD Coin",
            "TokenSymbol": "USDC",
            "TokenDecimal": "6",
            "TokenQuantity": "42",
        })))
        .unwrap();

        assert_eq!(transfer.display_name(), "USD Coin");
        assert_eq!(transfer.display_symbol(), "USDC");
        assert_eq!(transfer.decimals(), TokenDecimals::USDC);
        assert_eq!(transfer.quantity(), &TokenQuantity::from(42u64));
    }

    #[test]
    fn test_name_falls_back_to_symbol_then_contract() {
        let by_symbol = normalize(&raw(json!({
            "contractAddress": USDC,
            "TokenSymbol": "USDC",
            "value": "1",
        })))
        .unwrap();
        assert_eq!(by_symbol.display_name(), "USDC");

        let by_contract = normalize(&raw(json!({"contractAddress": USDC, "value": "1"}))).unwrap();
        assert_eq!(by_contract.display_name(), USDC);
        assert_eq!(by_contract.display_symbol(), "");
    }

    #[test]
    fn test_decimals_default_to_zero() {
        let garbled = normalize(&raw(json!({
            "contractAddress": USDC,
            "tokenDecimal": "six",
            "TokenDecimal": "6",
            "value": "1",
        })))
        .unwrap();
        // First non-blank alias is authoritative even when it fails to parse
        assert_eq!(garbled.decimals(), TokenDecimals::ZERO);

        let absent = normalize(&raw(json!({"contractAddress": USDC, "value": "1"}))).unwrap();
        assert_eq!(absent.decimals(), TokenDecimals::ZERO);
    }

    #[test]
    fn test_missing_quantity() {
        let err = normalize(&raw(json!({"contractAddress": USDC, "tokenName": "USD Coin"})))
            .unwrap_err();
        assert_eq!(err, TransferError::missing_quantity(USDC));
    }

    #[test]
    fn test_malformed_quantity() {
        let err = normalize(&raw(json!({"contractAddress": USDC, "value": "1.5"}))).unwrap_err();
        assert_eq!(err, TransferError::malformed_quantity(USDC, "1.5"));
        assert_eq!(err.contract(), USDC);
        assert_eq!(err.tx_hash(), None);
    }

    #[test]
    fn test_errors_name_the_transaction() {
        let missing = normalize(&raw(json!({"contractAddress": USDC, "hash": "0xfeed"}))).unwrap_err();
        assert_eq!(missing.tx_hash(), Some("0xfeed"));

        let malformed = normalize(&raw(json!({
            "contractAddress": USDC,
            "Hash": "0xbeef",
            "value": "12abc",
        })))
        .unwrap_err();
        assert_eq!(
            malformed,
            TransferError::malformed_quantity(USDC, "12abc").with_tx_hash(Some("0xbeef".into()))
        );
    }

    #[test]
    fn test_blank_primary_quantity_uses_alternate() {
        let transfer = normalize(&raw(json!({
            "contractAddress": USDC,
            "value": " ",
            "TokenQuantity": "9",
        })))
        .unwrap();
        assert_eq!(transfer.quantity(), &TokenQuantity::from(9u64));
    }

    #[test]
    fn test_builder_metadata_fallbacks() {
        let transfer = CanonicalTransfer::new(USDC, "0xa", "0xb", TokenQuantity::from(1u64))
            .with_metadata("", "USDC", TokenDecimals::USDC);
        assert_eq!(transfer.display_name(), "USDC");

        let bare = CanonicalTransfer::new(USDC, "0xa", "0xb", TokenQuantity::from(1u64));
        assert_eq!(bare.display_name(), USDC);
        assert_eq!(bare.decimals(), TokenDecimals::ZERO);
    }
}
