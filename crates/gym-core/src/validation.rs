//! Form-field parsing for the plan editor.
//!
//! Numeric fields arrive as the raw text a clerk typed. A parse failure
//! here is a validation error and must block submission before any
//! request goes out. Messages are display-ready, in the console's
//! language.

use crate::{CoreError, CoreResult};

/// Require a non-empty text field, returning it trimmed.
///
/// `field` is the display name used in the error message.
pub fn require_text(value: &str, field: &str) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::field(
            field,
            format!("El campo {} es obligatorio.", field),
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse a price field: a non-negative decimal, kept in its wire form.
pub fn parse_price(value: &str) -> CoreResult<String> {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(trimmed.to_string()),
        _ => Err(CoreError::field(
            "price",
            "El precio debe ser un número no negativo.",
        )),
    }
}

/// Parse a duration field: a positive whole number of days.
pub fn parse_duration(value: &str) -> CoreResult<i64> {
    let trimmed = value.trim();
    match trimmed.parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(CoreError::field(
            "duration",
            "La duración debe ser un número entero de días, mayor que cero.",
        )),
    }
}
