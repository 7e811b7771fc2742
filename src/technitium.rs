// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Technitium DNS HTTP API client.
//!
//! Wraps the four management API operations the tool needs:
//!
//! - `zones/records/get` - list records in a zone, optionally by type
//! - `zones/list` - list all zones hosted by the server
//! - `zones/create` - create a new primary zone
//! - `zones/records/add` - add a PTR record
//!
//! Every call is an HTTP GET against `{base_url}/api/{endpoint}` with the
//! static credential appended as the `token` query parameter. Responses are
//! a JSON envelope carrying a `status` field (`"ok"` on success) and an
//! `errorMessage` on failure.
//!
//! Transport failures (connect, timeout, non-2xx, undecodable body) surface
//! as [`ApiError`] and are fatal upstream. API-level rejection inside a
//! well-formed envelope is handed back to the caller, which decides
//! severity. No retries, no backoff, no rate limiting.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::errors::ApiError;

/// Fixed timeout applied to every API call.
pub const API_TIMEOUT: Duration = Duration::from_secs(10);

/// TTL, in seconds, for every PTR record this tool creates.
pub const PTR_RECORD_TTL_SECS: u32 = 3600;

/// Forward record types that receive PTR records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// IPv4 address record
    A,
    /// IPv6 address record
    Aaaa,
}

impl RecordKind {
    /// The type string used on the wire (`A` / `AAAA`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::Aaaa => "AAAA",
        }
    }
}

/// A DNS record as returned by `zones/records/get`.
///
/// Only the fields this tool reads are modeled; anything else in the record
/// object is ignored. Records are never mutated locally.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Fully-qualified record name
    #[serde(default)]
    pub name: String,
    /// Record type string (`A`, `AAAA`, ...)
    #[serde(rename = "type", default)]
    pub record_type: String,
    /// Type-specific record data
    #[serde(default)]
    pub r_data: RData,
}

impl DnsRecord {
    /// The record's address field, if present.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.r_data.ip_address.as_deref()
    }
}

/// Type-specific data of a record; A/AAAA carry `ipAddress`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RData {
    /// IPv4/IPv6 address string for A/AAAA records
    #[serde(default)]
    pub ip_address: Option<String>,
}

/// One entry from `zones/list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEntry {
    /// Zone name
    #[serde(default)]
    pub name: String,
}

/// JSON envelope every Technitium API response is wrapped in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// `"ok"` on success
    #[serde(default)]
    pub status: String,
    /// Human-readable failure reason, present when `status` is not `"ok"`
    #[serde(default)]
    pub error_message: Option<String>,
    /// Records payload of `zones/records/get`
    #[serde(default)]
    pub records: Vec<DnsRecord>,
    /// Zones payload of `zones/list`
    #[serde(default)]
    pub zones: Vec<ZoneEntry>,
}

impl ApiResponse {
    /// Whether the server accepted the operation.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// The server's failure reason, or a placeholder when it gave none.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.error_message.as_deref().unwrap_or("unknown error")
    }
}

/// Client for the Technitium DNS HTTP management API.
///
/// Holds a single `reqwest::Client` (with the fixed [`API_TIMEOUT`]) that is
/// reused across every call in a run.
#[derive(Debug, Clone)]
pub struct TechnitiumClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl TechnitiumClient {
    /// Create a client for the API at `base_url`, authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: &str) -> anyhow::Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        // Validate early so a typo in the constant fails before any request
        Url::parse(&base_url)
            .map_err(|e| anyhow::anyhow!("invalid API base URL '{base_url}': {e}"))?;

        let http = reqwest::Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

        Ok(Self {
            http,
            base_url,
            token: token.to_string(),
        })
    }

    /// Issue a GET to `{base_url}/api/{endpoint}` with the token appended.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body. A well-formed envelope is returned as `Ok` even
    /// when its `status` is not `"ok"`.
    async fn request(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}/api/{}", self.base_url, endpoint);

        debug!(endpoint = %endpoint, url = %url, "Technitium API request");

        let response = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let envelope: ApiResponse =
            response
                .json()
                .await
                .map_err(|source| ApiError::Decode {
                    endpoint: endpoint.to_string(),
                    source,
                })?;

        debug!(
            endpoint = %endpoint,
            status = %envelope.status,
            "Technitium API response"
        );

        Ok(envelope)
    }

    /// List records of one type in a zone.
    ///
    /// API-level rejection is reported and yields an empty list so the run
    /// can continue with whatever the other lookups returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure; fatal upstream.
    pub async fn list_zone_records(
        &self,
        zone: &str,
        kind: Option<RecordKind>,
    ) -> Result<Vec<DnsRecord>, ApiError> {
        let mut params = vec![("domain", zone)];
        if let Some(kind) = kind {
            params.push(("type", kind.as_str()));
        }

        let envelope = self.request("zones/records/get", &params).await?;
        if envelope.is_ok() {
            Ok(envelope.records)
        } else {
            warn!(
                zone = %zone,
                error = %envelope.error_message(),
                "Failed to get records"
            );
            Ok(Vec::new())
        }
    }

    /// Check whether a zone exists, by exact name match against `zones/list`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn zone_exists(&self, zone: &str) -> Result<bool, ApiError> {
        let envelope = self.request("zones/list", &[]).await?;
        if envelope.is_ok() {
            Ok(envelope.zones.iter().any(|z| z.name == zone))
        } else {
            warn!(
                error = %envelope.error_message(),
                "Failed to list zones"
            );
            Ok(false)
        }
    }

    /// Create a new primary zone. Returns whether the server accepted it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn create_zone(&self, zone: &str) -> Result<bool, ApiError> {
        let envelope = self
            .request("zones/create", &[("zone", zone), ("type", "Primary")])
            .await?;
        if !envelope.is_ok() {
            warn!(
                zone = %zone,
                error = %envelope.error_message(),
                "Failed to create zone"
            );
        }
        Ok(envelope.is_ok())
    }

    /// Add a PTR record `label.reverse_zone -> target` with the fixed TTL.
    ///
    /// Returns whether the server accepted it. No check is made for a
    /// pre-existing record; duplicate handling is the server's business.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn add_ptr_record(
        &self,
        reverse_zone: &str,
        label: &str,
        target: &str,
    ) -> Result<bool, ApiError> {
        let domain = format!("{label}.{reverse_zone}");
        let ttl = PTR_RECORD_TTL_SECS.to_string();
        let envelope = self
            .request(
                "zones/records/add",
                &[
                    ("zone", reverse_zone),
                    ("domain", domain.as_str()),
                    ("type", "PTR"),
                    ("ptrName", target),
                    ("ttl", ttl.as_str()),
                ],
            )
            .await?;
        if !envelope.is_ok() {
            warn!(
                domain = %domain,
                target = %target,
                error = %envelope.error_message(),
                "Failed to add PTR record"
            );
        }
        Ok(envelope.is_ok())
    }
}
