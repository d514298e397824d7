// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Loosely-typed transfer row as returned by the indexer

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One transfer row as a key/value bag
///
/// Values are read as text: JSON strings are used as-is and JSON numbers by
/// their decimal representation. Any other JSON type, and any string that is
/// blank after trimming, counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTransfer(Map<String, Value>);

impl RawTransfer {
    /// Wrap an existing JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Text value of a single key, if present and non-blank
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        let text = match self.0.get(key)? {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            _ => return None,
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Text value of the first alias that has one
    pub fn first_text(&self, aliases: &[&str]) -> Option<Cow<'_, str>> {
        aliases.iter().find_map(|key| self.text(key))
    }

    /// Underlying JSON object
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawTransfer {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for RawTransfer
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_and_numbers_are_text() {
        let raw: RawTransfer =
            serde_json::from_value(json!({"value": "100", "tokenDecimal": 18})).unwrap();
        assert_eq!(raw.text("value").as_deref(), Some("100"));
        assert_eq!(raw.text("tokenDecimal").as_deref(), Some("18"));
    }

    #[test]
    fn test_blank_and_non_scalar_values_are_absent() {
        let raw: RawTransfer = serde_json::from_value(json!({
            "tokenName": "   ",
            "tokenSymbol": null,
            "value": ["1"],
            "to": {"hash": "0x1"},
        }))
        .unwrap();
        assert!(raw.text("tokenName").is_none());
        assert!(raw.text("tokenSymbol").is_none());
        assert!(raw.text("value").is_none());
        assert!(raw.text("to").is_none());
        assert!(raw.text("missing").is_none());
    }

    #[test]
    fn test_first_text_respects_alias_order() {
        let raw: RawTransfer = [("TokenName", "Alt"), ("tokenName", "Primary")]
            .into_iter()
            .collect();
        assert_eq!(raw.first_text(&["tokenName", "TokenName"]).as_deref(), Some("Primary"));
        assert_eq!(raw.first_text(&["TokenName", "tokenName"]).as_deref(), Some("Alt"));
    }

    #[test]
    fn test_first_text_skips_blank_primary() {
        let raw: RawTransfer = [("value", ""), ("TokenQuantity", "7")].into_iter().collect();
        assert_eq!(raw.first_text(&["value", "TokenQuantity"]).as_deref(), Some("7"));
    }
}
