use crate::{RefreshSignal, failure_text};

use gym_client::ApiClient;
use gym_core::{CoreResult, MembershipPlan, PaymentMethod, require_text};

/// Registration view state
///
/// One submission creates the customer account and their first
/// membership together. The plan list is read-only here, loaded for the
/// selector and the amount-due display.
pub struct RegistrationForm {
    pub(crate) plans: Vec<MembershipPlan>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub membership_id: Option<i64>,
    pub payment_method: PaymentMethod,
    pub(crate) notice: Option<String>,
    pub(crate) error: Option<String>,
    signal: RefreshSignal,
}

impl RegistrationForm {
    pub fn new(signal: &RefreshSignal) -> Self {
        Self {
            plans: Vec::new(),
            username: String::new(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            membership_id: None,
            payment_method: PaymentMethod::default(),
            notice: None,
            error: None,
            signal: signal.clone(),
        }
    }

    /// Plans offered in the membership selector
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

    /// Anonymous catalog read for the selector; failures are logged
    pub async fn load_plans(&mut self, client: &ApiClient) {
        match client.list_plans().await {
            Ok(plans) => self.plans = plans,
            Err(err) => log::error!("failed to load membership plans: {}", err),
        }
    }

    /// Price of the selected plan, shown as the amount to charge
    ///
    /// Display only, never sent to the server; `"0"` when no plan is
    /// selected or the selection is not in the loaded list.
    pub fn amount_due(&self) -> String {
        self.membership_id
            .and_then(|id| self.plans.iter().find(|p| p.id == id))
            .map(|p| p.price.clone())
            .unwrap_or_else(|| "0".to_string())
    }

    /// Validate and send the combined registration request
    ///
    /// A missing membership selection or empty required field fails
    /// fast with no network call. Success clears every field back to
    /// its default and fires the refresh signal; failure keeps the
    /// entered values so the clerk can correct and resubmit.
    pub async fn submit(&mut self, client: &ApiClient) -> bool {
        self.notice = None;
        self.error = None;

        let Some(membership_id) = self.membership_id else {
            self.error = Some("Por favor selecciona una membresía para el cliente.".to_string());
            return false;
        };

        let (username, email, password, first_name, last_name) = match self.required_fields() {
            Ok(fields) => fields,
            Err(err) => {
                self.error = Some(err.message());
                return false;
            }
        };

        let result = client
            .register_with_membership(
                &username,
                &email,
                &password,
                &first_name,
                &last_name,
                membership_id,
                self.payment_method,
            )
            .await;

        match result {
            Ok(()) => {
                self.notice =
                    Some("¡Cliente registrado y membresía asignada con éxito!".to_string());
                self.clear_fields();
                self.signal.notify();
                true
            }
            Err(err) => {
                log::error!("registration failed: {}", err);
                self.error = Some(failure_text(&err, "Error al registrar."));
                false
            }
        }
    }

    fn required_fields(&self) -> CoreResult<(String, String, String, String, String)> {
        Ok((
            require_text(&self.username, "usuario")?,
            require_text(&self.email, "correo")?,
            require_text(&self.password, "contraseña")?,
            require_text(&self.first_name, "nombre")?,
            require_text(&self.last_name, "apellidos")?,
        ))
    }

    fn clear_fields(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
        self.first_name.clear();
        self.last_name.clear();
        self.membership_id = None;
        self.payment_method = PaymentMethod::default();
    }
}
