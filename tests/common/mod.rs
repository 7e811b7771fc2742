// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared helpers for the wiremock-based API test suites.

#![allow(dead_code)]

use serde_json::{json, Value};

/// Credential used by every test client.
pub const TEST_TOKEN: &str = "test-token";

/// Successful `zones/records/get` envelope.
pub fn records_body(records: Value) -> Value {
    json!({ "status": "ok", "records": records })
}

/// Successful `zones/list` envelope.
pub fn zones_body(names: &[&str]) -> Value {
    let zones: Vec<Value> = names
        .iter()
        .map(|name| json!({ "name": name, "type": "Primary" }))
        .collect();
    json!({ "status": "ok", "zones": zones })
}

/// Bare success envelope, as returned by the create endpoints.
pub fn ok_body() -> Value {
    json!({ "status": "ok" })
}

/// Failure envelope with the given server-side reason.
pub fn error_body(message: &str) -> Value {
    json!({ "status": "error", "errorMessage": message })
}

/// One A/AAAA record object in the wire format.
pub fn address_record(name: &str, record_type: &str, address: &str) -> Value {
    json!({
        "name": name,
        "type": record_type,
        "ttl": 300,
        "rData": { "ipAddress": address }
    })
}
