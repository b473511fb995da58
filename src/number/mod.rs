// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric display helpers.
//!
//! - [`closest_power_of_two`] estimates the nearest power-of-two exponent
//! - [`format_number`] renders values in US locale style, driven by
//!   [`NumberFormatOptions`]

mod format;
mod options;
mod power;

pub use format::{format_number, format_number_default};
pub use options::{NumberFormatOptions, ResolvedNumberFormat};
pub use power::closest_power_of_two;
