use crate::{parse_duration, parse_price, require_text};

#[test]
fn test_require_text_trims() {
    assert_eq!(require_text("  Gold  ", "name").unwrap(), "Gold");
}

#[test]
fn test_require_text_rejects_empty() {
    assert!(require_text("", "name").is_err());
    assert!(require_text("   ", "name").is_err());
}

#[test]
fn test_parse_price_accepts_decimals() {
    assert_eq!(parse_price("50.00").unwrap(), "50.00");
    assert_eq!(parse_price(" 0 ").unwrap(), "0");
    assert_eq!(parse_price("19.99").unwrap(), "19.99");
}

#[test]
fn test_parse_price_rejects_negative_and_junk() {
    assert!(parse_price("-1").is_err());
    assert!(parse_price("free").is_err());
    assert!(parse_price("").is_err());
    assert!(parse_price("inf").is_err());
}

#[test]
fn test_parse_duration_accepts_positive_days() {
    assert_eq!(parse_duration("30").unwrap(), 30);
    assert_eq!(parse_duration(" 365 ").unwrap(), 365);
}

#[test]
fn test_parse_duration_rejects_non_positive_and_junk() {
    assert!(parse_duration("0").is_err());
    assert!(parse_duration("-5").is_err());
    assert!(parse_duration("month").is_err());
    assert!(parse_duration("1.5").is_err());
}

#[test]
fn test_validation_error_names_the_field() {
    let err = parse_price("abc").unwrap_err();
    assert_eq!(err.field_name(), Some("price"));

    let err = parse_duration("abc").unwrap_err();
    assert_eq!(err.field_name(), Some("duration"));
}

#[test]
fn test_message_is_display_ready() {
    let err = parse_price("abc").unwrap_err();
    assert_eq!(err.message(), "El precio debe ser un número no negativo.");

    let err = require_text("", "usuario").unwrap_err();
    assert_eq!(err.message(), "El campo usuario es obligatorio.");
}
