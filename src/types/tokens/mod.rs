// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! ```text
//! U256 (raw, on-chain)
//!     |
//!     | TokenDecimals::normalize
//!     ↓
//! NormalizedAmount (f64, human-readable)
//!     |
//!     | × price per token
//!     ↓
//! UsdValue (f64, USD-denominated)
//! ```

mod decimals;
mod normalized;
mod usd;

pub use decimals::TokenDecimals;
pub use normalized::NormalizedAmount;
pub use usd::UsdValue;
