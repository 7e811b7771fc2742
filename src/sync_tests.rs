// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the pure planning phase.

#[cfg(test)]
mod tests {
    use crate::sync::plan;
    use crate::technitium::{DnsRecord, RData, RecordKind};

    fn record(name: &str, record_type: &str, address: Option<&str>) -> DnsRecord {
        DnsRecord {
            name: name.to_string(),
            record_type: record_type.to_string(),
            r_data: RData {
                ip_address: address.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_plan_empty_input() {
        let plan = plan(&[]);
        assert!(plan.mappings.is_empty());
        assert!(plan.reverse_zones.is_empty());
        assert_eq!(plan.skipped, 0);
    }

    #[test]
    fn test_plan_maps_a_and_aaaa_records() {
        let records = vec![
            record("web.example.com", "A", Some("192.168.1.10")),
            record("ipv6.example.com", "AAAA", Some("2001:db8::1")),
        ];

        let plan = plan(&records);
        assert_eq!(plan.mappings.len(), 2);
        assert_eq!(plan.skipped, 0);

        assert_eq!(plan.mappings[0].forward_name, "web.example.com");
        assert_eq!(plan.mappings[0].kind, RecordKind::A);
        assert_eq!(plan.mappings[0].reverse.zone, "1.168.192.in-addr.arpa");
        assert_eq!(plan.mappings[0].reverse.label, "10");

        assert_eq!(plan.mappings[1].kind, RecordKind::Aaaa);
        assert_eq!(
            plan.mappings[1].reverse.zone,
            "0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa"
        );
    }

    #[test]
    fn test_plan_skips_unrecognized_types() {
        let records = vec![
            record("mail.example.com", "MX", None),
            record("txt.example.com", "TXT", None),
            record("web.example.com", "A", Some("10.0.0.1")),
        ];

        let plan = plan(&records);
        assert_eq!(plan.mappings.len(), 1);
        assert_eq!(plan.skipped, 2);
    }

    #[test]
    fn test_plan_skips_missing_address() {
        let records = vec![record("broken.example.com", "A", None)];

        let plan = plan(&records);
        assert!(plan.mappings.is_empty());
        assert_eq!(plan.skipped, 1);
    }

    #[test]
    fn test_plan_skips_unparsable_address_and_continues() {
        let records = vec![
            record("bad.example.com", "A", Some("999.999.999.999")),
            record("worse.example.com", "A", Some("not-an-ip")),
            record("good.example.com", "A", Some("192.168.1.10")),
        ];

        let plan = plan(&records);
        assert_eq!(plan.mappings.len(), 1);
        assert_eq!(plan.skipped, 2);
        assert_eq!(plan.mappings[0].forward_name, "good.example.com");
    }

    #[test]
    fn test_plan_deduplicates_reverse_zones() {
        let records = vec![
            record("a.example.com", "A", Some("192.168.1.10")),
            record("b.example.com", "A", Some("192.168.1.20")),
            record("c.example.com", "A", Some("192.168.2.30")),
        ];

        let plan = plan(&records);
        assert_eq!(plan.mappings.len(), 3);

        let zones: Vec<&str> = plan.reverse_zones.iter().map(String::as_str).collect();
        assert_eq!(
            zones,
            vec!["1.168.192.in-addr.arpa", "2.168.192.in-addr.arpa"]
        );
    }

    #[test]
    fn test_plan_keeps_input_order_for_mappings() {
        let records = vec![
            record("z.example.com", "A", Some("10.0.0.2")),
            record("a.example.com", "A", Some("10.0.0.1")),
        ];

        let plan = plan(&records);
        assert_eq!(plan.mappings[0].forward_name, "z.example.com");
        assert_eq!(plan.mappings[1].forward_name, "a.example.com");
    }
}
