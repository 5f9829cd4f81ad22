use serde::{Deserialize, Serialize};

/// A membership tier as the server returns it.
///
/// `price` stays in the wire format (a quoted decimal such as `"50.00"`,
/// Django DecimalField style) and is only parsed when a form validates
/// user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub duration_days: i64,
    /// Absolute URL or server-relative path to the promo image
    #[serde(default)]
    pub image: Option<String>,
}

impl MembershipPlan {
    /// Selection label, e.g. `Gold - $50.00 (30 días)`
    pub fn option_label(&self) -> String {
        format!("{} - ${} ({} días)", self.name, self.price, self.duration_days)
    }
}
