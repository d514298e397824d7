// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across walletscan.
//!
//! This module provides newtype wrappers for token quantities, decimal
//! precision and rendered balances.

pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
