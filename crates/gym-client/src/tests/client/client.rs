use crate::ApiClient;

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = ApiClient::new("http://localhost:8000/", None).unwrap();
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = ApiClient::new("http://localhost:8000", None).unwrap();
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_token_stored() {
    let client = ApiClient::new("http://localhost:8000", Some("abc123")).unwrap();
    assert_eq!(client.token, Some("abc123".to_string()));
}

#[test]
fn test_token_none() {
    let client = ApiClient::new("http://localhost:8000", None).unwrap();
    assert!(client.token.is_none());
}

#[test]
fn test_with_timeout_builds() {
    let client = ApiClient::with_timeout("http://localhost:8000", None, Duration::from_secs(2));
    assert!(client.is_ok());
}
