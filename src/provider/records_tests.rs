//! Tests for record parsing, lookup, and the PATCH payload.

use super::records::{find_by_prefix, parse_records, RecordDescriptor, RecordType, RecordUpdate};

fn descriptor(id: &str, prefix: &str) -> RecordDescriptor {
    RecordDescriptor {
        id: id.to_string(),
        record_type: RecordType::A,
        prefix: prefix.to_string(),
        content: "1.2.3.4".to_string(),
        ttl: 3600,
    }
}

mod parsing {
    use super::*;

    const LISTING: &str = r#"{
        "result": {
            "data": [
                {
                    "id": "16684569",
                    "type": "dns_custom_records",
                    "attributes": {
                        "prefix": "dyn",
                        "type": "A",
                        "content": "1.2.3.4",
                        "ttl": 3600
                    }
                },
                {
                    "id": "16684570",
                    "type": "dns_custom_records",
                    "attributes": {
                        "prefix": "www",
                        "type": "CNAME",
                        "content": "host.example.net",
                        "ttl": 600
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn parses_a_and_cname_records() {
        let records = parse_records(LISTING.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].id, "16684569");
        assert_eq!(records[0].record_type, RecordType::A);
        assert_eq!(records[0].prefix, "dyn");
        assert_eq!(records[0].content, "1.2.3.4");
        assert_eq!(records[0].ttl, 3600);

        assert_eq!(records[1].record_type, RecordType::CNAME);
        assert_eq!(records[1].content, "host.example.net");
    }

    #[test]
    fn skips_items_with_other_type_tags() {
        let listing = r#"{
            "result": {
                "data": [
                    {
                        "id": "1",
                        "type": "dns_service_settings",
                        "attributes": { "enabled": true }
                    },
                    {
                        "id": "2",
                        "type": "dns_custom_records",
                        "attributes": {
                            "prefix": "dyn",
                            "type": "A",
                            "content": "1.2.3.4",
                            "ttl": 3600
                        }
                    }
                ]
            }
        }"#;

        let records = parse_records(listing.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "2");
    }

    #[test]
    fn skips_custom_records_with_unexpected_attributes() {
        // a TXT record carries the custom-record tag but not the A/CNAME shape
        let listing = r#"{
            "result": {
                "data": [
                    {
                        "id": "1",
                        "type": "dns_custom_records",
                        "attributes": {
                            "prefix": "_acme-challenge",
                            "type": "TXT",
                            "content": "token",
                            "ttl": 600
                        }
                    }
                ]
            }
        }"#;

        let records = parse_records(listing.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn accepts_numeric_record_ids() {
        let listing = r#"{
            "result": {
                "data": [
                    {
                        "id": 16684569,
                        "type": "dns_custom_records",
                        "attributes": {
                            "prefix": "dyn",
                            "type": "A",
                            "content": "1.2.3.4",
                            "ttl": 3600
                        }
                    }
                ]
            }
        }"#;

        let records = parse_records(listing.as_bytes()).unwrap();
        assert_eq!(records[0].id, "16684569");
    }

    #[test]
    fn rejects_a_malformed_envelope() {
        assert!(parse_records(b"<html>login expired</html>").is_err());
        assert!(parse_records(br#"{"result": {}}"#).is_err());
    }
}

mod lookup {
    use super::*;

    #[test]
    fn returns_the_matching_record() {
        let records = vec![descriptor("1", "dyn"), descriptor("2", "www")];
        let found = find_by_prefix(&records, "dyn").unwrap();
        assert_eq!(found.id, "1");
    }

    #[test]
    fn returns_none_without_a_match() {
        let records = vec![descriptor("1", "dyn"), descriptor("2", "www")];
        assert!(find_by_prefix(&records, "mail").is_none());
        assert!(find_by_prefix(&[], "dyn").is_none());
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let records = vec![descriptor("1", "dyn"), descriptor("2", "dyn")];
        assert_eq!(find_by_prefix(&records, "dyn").unwrap().id, "1");
    }

    #[test]
    fn prefix_comparison_is_exact() {
        let records = vec![descriptor("1", "dyn")];
        assert!(find_by_prefix(&records, "dy").is_none());
        assert!(find_by_prefix(&records, "dynx").is_none());
        assert!(find_by_prefix(&records, "DYN").is_none());
    }
}

mod payload {
    use super::*;

    #[test]
    fn patch_body_matches_the_console_shape() {
        let update = RecordUpdate::address("dyn", "5.6.7.8", 3600);
        let body = update.to_payload("16684569").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["type"], "dns_service_records");
        assert_eq!(value["id"], "16684569");
        assert_eq!(value["attributes"]["type"], "A");
        assert_eq!(value["attributes"]["prefix"], "dyn");
        assert_eq!(value["attributes"]["content"], "5.6.7.8");
        assert_eq!(value["attributes"]["ttl"], 3600);
    }

    #[test]
    fn alias_updates_carry_the_cname_type() {
        let update = RecordUpdate::alias("www", "host.example.net", 600);
        let body = update.to_payload("2").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["attributes"]["type"], "CNAME");
        assert_eq!(value["attributes"]["content"], "host.example.net");
    }
}
