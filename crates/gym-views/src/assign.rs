use crate::{RefreshSignal, failure_text};

use gym_client::ApiClient;
use gym_core::{MembershipPlan, UserAccount};

/// Resolve a plan image reference for display
///
/// References that are already absolute URLs pass through untouched;
/// server-relative paths are joined onto the API base address.
pub fn resolve_image_url(base_url: &str, image: &str) -> String {
    if image.starts_with("http") {
        image.to_string()
    } else {
        format!("{}{}", base_url, image)
    }
}

/// Assignment view state: binds an existing customer to a plan,
/// creating or renewing their membership
pub struct AssignmentForm {
    pub(crate) users: Vec<UserAccount>,
    pub(crate) plans: Vec<MembershipPlan>,
    pub selected_user: Option<i64>,
    pub selected_plan: Option<i64>,
    pub(crate) notice: Option<String>,
    pub(crate) error: Option<String>,
    signal: RefreshSignal,
}

impl AssignmentForm {
    pub fn new(signal: &RefreshSignal) -> Self {
        Self {
            users: Vec::new(),
            plans: Vec::new(),
            selected_user: None,
            selected_plan: None,
            notice: None,
            error: None,
            signal: signal.clone(),
        }
    }

    /// Customers offered in the selector
    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    /// Plans offered as selectable cards
    pub fn plans(&self) -> &[MembershipPlan] {
        &self.plans
    }

    /// Success message from the last submission
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Inline message from the last failed submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the customer and plan lists; each failure is logged on its
    /// own and leaves that list as it was
    pub async fn load(&mut self, client: &ApiClient) {
        match client.list_users().await {
            Ok(users) => self.users = users,
            Err(err) => log::error!("failed to load user list: {}", err),
        }
        match client.list_plans().await {
            Ok(plans) => self.plans = plans,
            Err(err) => log::error!("failed to load membership plans: {}", err),
        }
    }

    /// Post the assignment
    ///
    /// Both selections are required; missing either surfaces a
    /// validation message with no network call. Success clears the
    /// selections, keeps the server's receipt message for display, and
    /// fires the refresh signal. Failure leaves the selections intact.
    pub async fn submit(&mut self, client: &ApiClient) -> bool {
        self.notice = None;
        self.error = None;

        let (Some(user), Some(membership_type)) = (self.selected_user, self.selected_plan) else {
            self.error = Some("Selecciona un cliente y la membresía.".to_string());
            return false;
        };

        match client.create_assignment(user, membership_type).await {
            Ok(receipt) => {
                self.notice = Some(
                    receipt
                        .message
                        .unwrap_or_else(|| "Operación exitosa".to_string()),
                );
                self.selected_user = None;
                self.selected_plan = None;
                self.signal.notify();
                true
            }
            Err(err) => {
                log::error!("assignment failed: {}", err);
                self.error = Some(failure_text(&err, "Error al asignar."));
                false
            }
        }
    }
}
