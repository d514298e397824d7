// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer record normalization.

/// Reasons a raw transfer record cannot be turned into a canonical transfer.
///
/// Both variants are recoverable: the aggregator skips the record, bumps its
/// skipped counter and keeps going. They never zero out or corrupt a running
/// balance.
///
/// # Examples
///
/// ```rust
/// use walletscan::TransferError;
///
/// let error = TransferError::malformed_quantity("0xdac17f958d2ee523a2206206994597c13d831ec7", "12abc");
/// assert!(error.to_string().contains("12abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// None of the quantity field aliases carried a value.
    #[error("Missing transfer quantity for contract {contract}")]
    MissingQuantity {
        /// Contract address of the record (may be empty)
        contract: String,
        /// Hash of the transaction the record came from, when known
        tx_hash: Option<String>,
    },

    /// A quantity was present but is not a base-10 non-negative integer.
    #[error("Malformed transfer quantity {raw:?} for contract {contract}")]
    MalformedQuantity {
        /// Contract address of the record (may be empty)
        contract: String,
        /// The text that failed to parse
        raw: String,
        /// Hash of the transaction the record came from, when known
        tx_hash: Option<String>,
    },
}

impl TransferError {
    /// Create a `MissingQuantity` error for a contract.
    pub fn missing_quantity(contract: impl Into<String>) -> Self {
        TransferError::MissingQuantity {
            contract: contract.into(),
            tx_hash: None,
        }
    }

    /// Create a `MalformedQuantity` error for a contract and the offending text.
    pub fn malformed_quantity(contract: impl Into<String>, raw: impl Into<String>) -> Self {
        TransferError::MalformedQuantity {
            contract: contract.into(),
            raw: raw.into(),
            tx_hash: None,
        }
    }

    /// Attach the hash of the offending transaction.
    pub fn with_tx_hash(mut self, hash: Option<String>) -> Self {
        match &mut self {
            TransferError::MissingQuantity { tx_hash, .. }
            | TransferError::MalformedQuantity { tx_hash, .. } => *tx_hash = hash,
        }
        self
    }

    /// Contract address of the record that failed.
    pub fn contract(&self) -> &str {
        match self {
            TransferError::MissingQuantity { contract, .. }
            | TransferError::MalformedQuantity { contract, .. } => contract,
        }
    }

    /// Transaction hash of the record that failed, if the row carried one
    pub fn tx_hash(&self) -> Option<&str> {
        match self {
            TransferError::MissingQuantity { tx_hash, .. }
            | TransferError::MalformedQuantity { tx_hash, .. } => tx_hash.as_deref(),
        }
    }
}
