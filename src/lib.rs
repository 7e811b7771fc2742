// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Autoptr - Auto-PTR Generator for Technitium DNS
//!
//! Autoptr is a one-shot automation tool that creates PTR (reverse DNS)
//! records for every A and AAAA record in a Technitium DNS zone.
//!
//! ## Overview
//!
//! A single run performs four phases, strictly in order:
//!
//! 1. Fetch all A and AAAA records from the configured forward zone via the
//!    Technitium HTTP management API
//! 2. Derive the reverse zone and PTR label for each address (/24 granularity
//!    for IPv4, /64 for IPv6)
//! 3. Ensure every referenced reverse zone exists, creating missing ones
//! 4. Create one PTR record per forward record, pointing back at the forward
//!    name
//!
//! There is no persistent state: each run rediscovers zone existence from the
//! server, and no attempt is made to deduplicate against pre-existing PTR
//! records.
//!
//! ## Modules
//!
//! - [`config`] - Hardcoded run configuration and validation
//! - [`errors`] - API client and reverse-derivation error types
//! - [`reverse`] - Pure IP address to reverse-name derivation
//! - [`technitium`] - Technitium HTTP API client
//! - [`sync`] - Orchestration of a single run
//!
//! ## Example
//!
//! ```rust
//! use autoptr::reverse::reverse_name;
//!
//! let name = reverse_name("192.168.1.10").unwrap();
//! assert_eq!(name.zone, "1.168.192.in-addr.arpa");
//! assert_eq!(name.label, "10");
//! assert_eq!(name.fqdn(), "10.1.168.192.in-addr.arpa");
//! ```

pub mod config;
pub mod errors;
pub mod reverse;
pub mod sync;
pub mod technitium;

#[cfg(test)]
mod sync_tests;
