//! Tests for the lookup/update request wire format.

use chrono::{DateTime, Utc};
use psfoodservice::models::{
    ArticleNumberLookupRequest, GlnLookupRequest, GtinLookupRequest, LookupRequest,
    PsIdLookupRequest,
};

// ---------------------------------------------------------------------------
// Field casing
// ---------------------------------------------------------------------------

#[test]
fn lookup_request_uses_pascal_case_fields() {
    let value = serde_json::to_value(LookupRequest::default()).unwrap();
    assert!(value.get("LastUpdatedAfter").is_some());
    assert_eq!(value.get("TargetMarket").and_then(|v| v.as_i64()), Some(0));
}

#[test]
fn gtin_request_flattens_the_base_fields() {
    let request = GtinLookupRequest::new(["8710000000000"]).target_market(528);
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value.get("SearchCriteria").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(1)
    );
    assert_eq!(value.get("TargetMarket").and_then(|v| v.as_i64()), Some(528));
    assert!(value.get("LastUpdatedAfter").is_some());
}

#[test]
fn article_number_request_omits_unset_scope_fields() {
    let request = ArticleNumberLookupRequest::new(["A-1"]);
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("GLN").is_none());
    assert!(value.get("RelationId").is_none());

    let scoped = ArticleNumberLookupRequest::new(["A-1"])
        .gln("8710000000000")
        .relation_id(42);
    let value = serde_json::to_value(&scoped).unwrap();
    assert_eq!(
        value.get("GLN").and_then(|v| v.as_str()),
        Some("8710000000000")
    );
    assert_eq!(value.get("RelationId").and_then(|v| v.as_i64()), Some(42));
}

#[test]
fn gln_request_carries_the_gln() {
    let value = serde_json::to_value(GlnLookupRequest::new("8710123456789")).unwrap();
    assert_eq!(
        value.get("GLN").and_then(|v| v.as_str()),
        Some("8710123456789")
    );
}

#[test]
fn ps_id_criteria_are_numeric() {
    let value = serde_json::to_value(PsIdLookupRequest::new([17, 23])).unwrap();
    assert_eq!(
        value.get("SearchCriteria").cloned(),
        Some(serde_json::json!([17, 23]))
    );
}

// ---------------------------------------------------------------------------
// Change-date default
// ---------------------------------------------------------------------------

#[test]
fn last_updated_after_defaults_to_yesterday() {
    let request = LookupRequest::default();
    let parsed = DateTime::parse_from_rfc3339(&request.last_updated_after)
        .expect("default should be RFC 3339");
    let age = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
    assert!(age.num_hours() >= 23 && age.num_hours() <= 25);
}

#[test]
fn last_updated_after_can_be_overridden() {
    let request = LookupRequest::default().last_updated_after("2026-01-01T00:00:00Z");
    assert_eq!(request.last_updated_after, "2026-01-01T00:00:00Z");
}
