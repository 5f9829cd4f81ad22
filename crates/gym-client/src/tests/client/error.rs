use crate::ClientError;

#[test]
fn test_api_error_display_includes_status() {
    let err = ClientError::api_error(400, "Ya tiene una membresía activa".to_string());
    let text = err.to_string();

    assert!(text.contains("Ya tiene una membresía activa"));
    assert!(text.contains("400"));
}

#[test]
fn test_server_message_present_for_api_errors() {
    let err = ClientError::api_error(409, "duplicate".to_string());
    assert_eq!(err.server_message(), Some("duplicate"));
}

#[test]
fn test_server_message_absent_for_decode_errors() {
    let json_err = serde_json::from_str::<i64>("not json").unwrap_err();
    let err = ClientError::from_json(json_err);

    assert!(err.server_message().is_none());
}
