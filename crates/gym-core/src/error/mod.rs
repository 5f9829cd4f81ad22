use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid payment method: {value} {location}")]
    InvalidPaymentMethod {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a named form field
    #[track_caller]
    pub fn field<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }

    /// The form field this error refers to, if any
    pub fn field_name(&self) -> Option<&str> {
        match self {
            CoreError::Validation { field, .. } => field.as_deref(),
            CoreError::InvalidPaymentMethod { .. } => Some("payment_method"),
        }
    }

    /// The display message, without the source location the `Display`
    /// impl appends for logs
    pub fn message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidPaymentMethod { value, .. } => {
                format!("Método de pago no válido: {}", value)
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
