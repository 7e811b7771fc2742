// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Run configuration for the Auto-PTR generator.
//!
//! Configuration is deliberately a set of hardcoded constants edited in
//! source before running the tool. There is no config file, environment
//! variable, or CLI flag handling for behavior; only logging verbosity is
//! ambient (`RUST_LOG` / `RUST_LOG_FORMAT`).
//!
//! The constants are collected into a [`Config`] value that is passed
//! explicitly into the API client and orchestrator, so tests can inject a
//! mock endpoint and fake credential instead of touching the constants.

use anyhow::{bail, Result};

/// Base URL of the Technitium DNS server's HTTP management API.
pub const API_URL: &str = "http://localhost:5380";

/// API token. Get one from: Technitium Web UI -> Settings -> API.
pub const API_TOKEN: &str = "YOUR_API_TOKEN_HERE";

/// The forward zone whose A/AAAA records will receive PTR records.
pub const ZONE_NAME: &str = "example.com";

/// When true, report what would be done without making any changes.
pub const DRY_RUN: bool = false;

/// Placeholder value that signals the token constant was never edited.
const TOKEN_PLACEHOLDER: &str = "YOUR_API_TOKEN_HERE";

/// Resolved configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Technitium API (scheme + host + port, no trailing `/api`)
    pub api_url: String,
    /// Static API credential, sent as the `token` query parameter on every call
    pub api_token: String,
    /// Forward zone to process
    pub zone_name: String,
    /// Report-only mode: announce intended changes without issuing them
    pub dry_run: bool,
}

impl Config {
    /// Build a `Config` from the hardcoded constants above.
    #[must_use]
    pub fn from_constants() -> Self {
        Self {
            api_url: API_URL.to_string(),
            api_token: API_TOKEN.to_string(),
            zone_name: ZONE_NAME.to_string(),
            dry_run: DRY_RUN,
        }
    }

    /// Validate the configuration before any network activity.
    ///
    /// Rejects the run when the credential placeholder was left unset or a
    /// required field is empty.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field; the caller treats this
    /// as fatal.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.is_empty() || self.api_token == TOKEN_PLACEHOLDER {
            bail!(
                "API_TOKEN is not configured; get a token from the Technitium \
                 Web UI -> Settings -> API and edit src/config.rs"
            );
        }
        if self.api_url.is_empty() {
            bail!("API_URL must not be empty");
        }
        if self.zone_name.is_empty() {
            bail!("ZONE_NAME must not be empty");
        }
        Ok(())
    }
}
