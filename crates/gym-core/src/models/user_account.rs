use serde::{Deserialize, Serialize};

/// A customer account as the server returns it.
///
/// The password is write-only: it exists in the registration request and
/// never comes back in a listed record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserAccount {
    /// Selection label: `username (First Last)` when a first name exists
    pub fn option_label(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} ({} {})", self.username, first, last),
            (Some(first), None) => format!("{} ({})", self.username, first),
            _ => self.username.clone(),
        }
    }
}
