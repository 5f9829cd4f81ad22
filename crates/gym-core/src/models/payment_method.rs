use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How the customer pays the initial membership.
///
/// Wire values are the uppercase Spanish tokens the backend stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "EFECTIVO")]
    Cash,
    #[serde(rename = "TARJETA")]
    Card,
    #[serde(rename = "TRANSFERENCIA")]
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cash => "EFECTIVO",
            Self::Card => "TARJETA",
            Self::Transfer => "TRANSFERENCIA",
        }
    }

    /// Display label for menus
    pub fn label(&self) -> &str {
        match self {
            Self::Cash => "Efectivo",
            Self::Card => "Tarjeta",
            Self::Transfer => "Transferencia",
        }
    }

    pub const ALL: [PaymentMethod; 3] = [Self::Cash, Self::Card, Self::Transfer];
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_uppercase().as_str() {
            "EFECTIVO" => Ok(Self::Cash),
            "TARJETA" => Ok(Self::Card),
            "TRANSFERENCIA" => Ok(Self::Transfer),
            _ => Err(CoreError::InvalidPaymentMethod {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
