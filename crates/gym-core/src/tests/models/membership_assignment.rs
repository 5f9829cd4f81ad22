use crate::MembershipAssignment;

use chrono::NaiveDate;

fn sample(active: bool) -> MembershipAssignment {
    MembershipAssignment {
        id: 1,
        user: Some(7),
        user_name: "jdoe".to_string(),
        user_full_name: Some("John Doe".to_string()),
        membership_type: Some(3),
        membership_name: "Gold".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        is_active: active,
    }
}

#[test]
fn test_status_word() {
    assert_eq!(sample(true).status_word(), "activo");
    assert_eq!(sample(false).status_word(), "vencido");
}

#[test]
fn test_status_badge() {
    assert_eq!(sample(true).status_badge(), "ACTIVO");
    assert_eq!(sample(false).status_badge(), "VENCIDO");
}

#[test]
fn test_deserialize_server_row() {
    let row: MembershipAssignment = serde_json::from_str(
        r#"{
            "id": 1,
            "user_name": "jdoe",
            "user_full_name": "John Doe",
            "membership_name": "Gold",
            "is_active": true,
            "start_date": "2024-01-01",
            "end_date": "2024-02-01"
        }"#,
    )
    .unwrap();

    assert_eq!(row.id, 1);
    assert_eq!(row.user_name, "jdoe");
    assert_eq!(row.user, None);
    assert_eq!(row.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert!(row.is_active);
}
