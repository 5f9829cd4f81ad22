use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-to-plan binding as the server returns it.
///
/// Assignments are never synthesized client side: every instance comes
/// from a server response, with the user and plan references already
/// denormalized for display. `is_active` is server-computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipAssignment {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    pub user_name: String,
    #[serde(default)]
    pub user_full_name: Option<String>,
    #[serde(default)]
    pub membership_type: Option<i64>,
    pub membership_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl MembershipAssignment {
    /// Localized status word, lowercase (search form)
    pub fn status_word(&self) -> &'static str {
        if self.is_active { "activo" } else { "vencido" }
    }

    /// Localized status word, uppercase (badge form)
    pub fn status_badge(&self) -> &'static str {
        if self.is_active { "ACTIVO" } else { "VENCIDO" }
    }
}
