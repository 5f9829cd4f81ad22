use crate::MembershipPlan;

#[test]
fn test_option_label() {
    let plan = MembershipPlan {
        id: 1,
        name: "Gold".to_string(),
        price: "50.00".to_string(),
        duration_days: 30,
        image: None,
    };
    assert_eq!(plan.option_label(), "Gold - $50.00 (30 días)");
}

#[test]
fn test_image_defaults_to_none() {
    let plan: MembershipPlan =
        serde_json::from_str(r#"{"id":1,"name":"Gold","price":"50.00","duration_days":30}"#)
            .unwrap();
    assert!(plan.image.is_none());
}

#[test]
fn test_image_kept_when_present() {
    let plan: MembershipPlan = serde_json::from_str(
        r#"{"id":2,"name":"Black","price":"90.00","duration_days":90,"image":"/media/black.png"}"#,
    )
    .unwrap();
    assert_eq!(plan.image.as_deref(), Some("/media/black.png"));
}
