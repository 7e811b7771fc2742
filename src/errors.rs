// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the Technitium API client and reverse-name derivation.
//!
//! The split follows the run's error taxonomy:
//!
//! - [`ApiError`] covers transport-level failures (connect, timeout, non-2xx
//!   status, undecodable body). These are fatal to the whole run and are
//!   propagated up to `main` rather than handled in place.
//! - API-level rejection (`status != "ok"` inside a well-formed JSON
//!   envelope) is *not* an `ApiError`; the client hands the envelope back and
//!   the orchestrator decides whether to skip, count, or abort.
//! - [`ReverseError`] covers unparsable IP addresses on individual records;
//!   the offending record is skipped and the run continues.

use thiserror::Error;

/// Transport-level failure talking to the Technitium HTTP API.
///
/// Any variant here means the request/response cycle itself broke; the run
/// cannot trust further API interaction and terminates.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP request could not be sent or the response never arrived
    /// (connection refused, DNS failure, 10 second timeout, ...).
    #[error("request to '{endpoint}' failed: {source}")]
    Transport {
        /// API endpoint path (e.g. `zones/list`)
        endpoint: String,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status code.
    #[error("'{endpoint}' returned HTTP {status}")]
    Status {
        /// API endpoint path
        endpoint: String,
        /// HTTP status code returned by the server
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON envelope.
    #[error("failed to decode response from '{endpoint}': {source}")]
    Decode {
        /// API endpoint path
        endpoint: String,
        /// Underlying reqwest/serde error
        #[source]
        source: reqwest::Error,
    },
}

/// Failure to derive a reverse name from a record's address field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReverseError {
    /// The address string is not a valid IPv4 or IPv6 address.
    #[error("invalid IP address '{address}'")]
    InvalidAddress {
        /// The address string as it appeared in the record
        address: String,
    },
}
