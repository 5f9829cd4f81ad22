use crate::PaymentMethod;

use std::str::FromStr;

#[test]
fn test_payment_method_as_str() {
    assert_eq!(PaymentMethod::Cash.as_str(), "EFECTIVO");
    assert_eq!(PaymentMethod::Card.as_str(), "TARJETA");
    assert_eq!(PaymentMethod::Transfer.as_str(), "TRANSFERENCIA");
}

#[test]
fn test_payment_method_from_str() {
    assert_eq!(
        PaymentMethod::from_str("EFECTIVO").unwrap(),
        PaymentMethod::Cash
    );
    assert_eq!(
        PaymentMethod::from_str("tarjeta").unwrap(),
        PaymentMethod::Card
    );
    assert!(PaymentMethod::from_str("bitcoin").is_err());
}

#[test]
fn test_payment_method_default_is_cash() {
    assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
}

#[test]
fn test_payment_method_wire_format() {
    let json = serde_json::to_string(&PaymentMethod::Transfer).unwrap();
    assert_eq!(json, "\"TRANSFERENCIA\"");

    let parsed: PaymentMethod = serde_json::from_str("\"EFECTIVO\"").unwrap();
    assert_eq!(parsed, PaymentMethod::Cash);
}
