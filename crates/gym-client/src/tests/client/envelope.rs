use crate::client::envelope::ListEnvelope;

use gym_core::MembershipPlan;

#[test]
fn test_bare_array_yields_records() {
    let body = r#"[
        {"id": 1, "name": "Gold", "price": "50.00", "duration_days": 30, "image": null}
    ]"#;

    let envelope: ListEnvelope<MembershipPlan> = serde_json::from_str(body).unwrap();
    let records = envelope.into_records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Gold");
}

#[test]
fn test_paginated_object_yields_results() {
    let body = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {"id": 1, "name": "Gold", "price": "50.00", "duration_days": 30, "image": null},
            {"id": 2, "name": "Silver", "price": "30.00", "duration_days": 30, "image": null}
        ]
    }"#;

    let envelope: ListEnvelope<MembershipPlan> = serde_json::from_str(body).unwrap();
    let records = envelope.into_records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "Silver");
}

#[test]
fn test_empty_bare_array() {
    let envelope: ListEnvelope<MembershipPlan> = serde_json::from_str("[]").unwrap();
    assert!(envelope.into_records().is_empty());
}

#[test]
fn test_empty_paginated_results() {
    let body = r#"{"count": 0, "results": []}"#;
    let envelope: ListEnvelope<MembershipPlan> = serde_json::from_str(body).unwrap();
    assert!(envelope.into_records().is_empty());
}
