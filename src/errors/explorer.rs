// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for explorer construction.

/// Errors that can occur when building an [`crate::Explorer`] from a base URL.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// The base URL could not be parsed.
    #[error("Invalid explorer base URL {base}")]
    InvalidBaseUrl {
        /// The rejected base URL
        base: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The base URL parsed but is not an `http` or `https` URL.
    #[error("Unsupported explorer URL scheme {scheme} in {base}")]
    UnsupportedScheme {
        /// The rejected base URL
        base: String,
        /// The scheme that was found
        scheme: String,
    },
}
