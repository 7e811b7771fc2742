// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pure IP address to reverse-DNS name derivation.
//!
//! Maps an address string to the reverse zone it belongs to and the PTR
//! record label inside that zone, under a fixed zone-cut policy:
//!
//! - IPv4 reverse zones are cut at /24: `192.168.1.10` lands in
//!   `1.168.192.in-addr.arpa` with label `10`.
//! - IPv6 reverse zones are cut at /64: the address is expanded to all 32
//!   nibbles, the nibbles are reversed, and the trailing 16 reversed nibbles
//!   (the /64 prefix) form the zone under `ip6.arpa` while the leading 16
//!   form the label.
//!
//! The zone cut is a policy choice, not configurable; it assumes that
//! granularity regardless of the network's actual delegation. No side
//! effects, no network access.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::errors::ReverseError;

/// Number of nibbles in a fully expanded IPv6 address.
const V6_NIBBLES: usize = 32;

/// Nibbles belonging to the /64 network prefix (the reverse zone).
const V6_ZONE_NIBBLES: usize = 16;

/// A derived reverse-DNS name: the zone it lives in and the record label.
///
/// `label.zone` is the fully-qualified PTR record name for the address the
/// value was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseName {
    /// Reverse zone name, ending in `in-addr.arpa` or `ip6.arpa`
    pub zone: String,
    /// PTR record label(s) inside the zone
    pub label: String,
}

impl ReverseName {
    /// Fully-qualified PTR record name, `label.zone`.
    #[must_use]
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.label, self.zone)
    }
}

/// Derive the reverse zone and PTR label for an IP address string.
///
/// # Errors
///
/// Returns [`ReverseError::InvalidAddress`] when the string does not parse
/// as an IPv4 or IPv6 address; callers skip the record and continue.
pub fn reverse_name(address: &str) -> Result<ReverseName, ReverseError> {
    let ip: IpAddr = address
        .parse()
        .map_err(|_| ReverseError::InvalidAddress {
            address: address.to_string(),
        })?;

    Ok(match ip {
        IpAddr::V4(v4) => reverse_v4(v4),
        IpAddr::V6(v6) => reverse_v6(v6),
    })
}

/// IPv4: the three most-significant octets, reversed, form the /24 zone; the
/// last octet is the label.
fn reverse_v4(addr: Ipv4Addr) -> ReverseName {
    let o = addr.octets();
    ReverseName {
        zone: format!("{}.{}.{}.in-addr.arpa", o[2], o[1], o[0]),
        label: o[3].to_string(),
    }
}

/// IPv6: expand to 32 hex nibbles (no compression), reverse nibble order,
/// then split at the /64 boundary.
fn reverse_v6(addr: Ipv6Addr) -> ReverseName {
    let nibbles: Vec<String> = addr
        .octets()
        .iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0f])
        .map(|nibble| format!("{nibble:x}"))
        .collect();
    debug_assert_eq!(nibbles.len(), V6_NIBBLES);

    let reversed: Vec<&str> = nibbles.iter().rev().map(String::as_str).collect();

    ReverseName {
        zone: format!("{}.ip6.arpa", reversed[V6_ZONE_NIBBLES..].join(".")),
        label: reversed[..V6_ZONE_NIBBLES].join("."),
    }
}
