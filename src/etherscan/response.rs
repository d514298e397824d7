// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan response envelope

use serde::Deserialize;
use serde_json::Value;

use crate::{FetchError, RawTransfer};

/// Message Etherscan uses when an address has no matching transactions
pub const NO_TRANSACTIONS_FOUND: &str = "No transactions found";

/// The `{status, message, result}` envelope every Etherscan endpoint returns
///
/// `result` is an array of rows on success but a plain string on many errors,
/// so it is kept as untyped JSON until [`into_transfers`](Self::into_transfers).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EtherscanResponse {
    /// `"1"` on success, `"0"` on failure or empty history
    #[serde(default)]
    pub status: String,
    /// Human-readable status message
    #[serde(default)]
    pub message: String,
    /// Rows, or an error string
    #[serde(default)]
    pub result: Value,
}

impl EtherscanResponse {
    /// Interpret the envelope as transfer rows.
    ///
    /// A textual result equal to [`NO_TRANSACTIONS_FOUND`] (any case) yields
    /// the [`FetchError::NoTransactions`] sentinel; other text is an API error.
    /// A missing or `null` result counts as zero rows.
    /// A `"0"` status is checked after the rows decode and follows the same
    /// sentinel rule against `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use walletscan::{EtherscanResponse, FetchError};
    ///
    /// let empty: EtherscanResponse = serde_json::from_str(
    ///     r#"{"status":"0","message":"No transactions found","result":[]}"#,
    /// ).unwrap();
    /// assert!(matches!(empty.into_transfers(), Err(FetchError::NoTransactions)));
    /// ```
    pub fn into_transfers(self) -> Result<Vec<RawTransfer>, FetchError> {
        let transfers = match self.result {
            Value::Null => Vec::new(),
            Value::String(text) => {
                if text.trim().eq_ignore_ascii_case(NO_TRANSACTIONS_FOUND) {
                    return Err(FetchError::NoTransactions);
                }
                return Err(FetchError::api(format!("unexpected result text: {text}")));
            }
            Value::Array(rows) => rows
                .into_iter()
                .map(serde_json::from_value::<RawTransfer>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| FetchError::decode(format!("parsing token transactions: {e}")))?,
            other => {
                return Err(FetchError::decode(format!(
                    "unexpected result type: {other}"
                )))
            }
        };

        if self.status == "0" {
            if self.message.trim().eq_ignore_ascii_case(NO_TRANSACTIONS_FOUND) {
                return Err(FetchError::NoTransactions);
            }
            return Err(FetchError::api(self.message));
        }

        Ok(transfers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> EtherscanResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_rows_are_returned() {
        let transfers = envelope(json!({
            "status": "1",
            "message": "OK",
            "result": [
                {"contractAddress": "0xa", "value": "1"},
                {"contractAddress": "0xb", "TokenQuantity": "2"},
            ],
        }))
        .into_transfers()
        .unwrap();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[1].text("TokenQuantity").as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_result_is_empty() {
        let transfers = envelope(json!({"status": "1", "message": "OK"}))
            .into_transfers()
            .unwrap();
        assert!(transfers.is_empty());
    }

    #[test]
    fn test_null_result_is_empty() {
        let transfers = envelope(json!({"status": "1", "message": "OK", "result": null}))
            .into_transfers()
            .unwrap();
        assert!(transfers.is_empty());

        // Still subject to the status check
        let err = envelope(json!({"status": "0", "message": "NOTOK", "result": null}))
            .into_transfers()
            .unwrap_err();
        assert!(matches!(err, FetchError::Api { ref message } if message == "NOTOK"));
    }

    #[test]
    fn test_no_transactions_text_result() {
        let err = envelope(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "no transactions found",
        }))
        .into_transfers()
        .unwrap_err();
        assert!(err.is_no_transactions());
    }

    #[test]
    fn test_other_text_result_is_api_error() {
        let err = envelope(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Invalid API Key",
        }))
        .into_transfers()
        .unwrap_err();
        assert!(matches!(err, FetchError::Api { ref message } if message.contains("Invalid API Key")));
    }

    #[test]
    fn test_status_zero_with_rows() {
        let sentinel = envelope(json!({
            "status": "0",
            "message": "No transactions found",
            "result": [],
        }))
        .into_transfers()
        .unwrap_err();
        assert!(sentinel.is_no_transactions());

        let failure = envelope(json!({
            "status": "0",
            "message": "Query Timeout occured",
            "result": [],
        }))
        .into_transfers()
        .unwrap_err();
        assert!(matches!(failure, FetchError::Api { ref message } if message == "Query Timeout occured"));
    }

    #[test]
    fn test_non_object_rows_fail_to_decode() {
        let err = envelope(json!({"status": "1", "message": "OK", "result": [1, 2]}))
            .into_transfers()
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
