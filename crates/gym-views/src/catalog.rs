use crate::failure_text;

use gym_client::ApiClient;
use gym_core::{CoreResult, MembershipPlan, parse_duration, parse_price, require_text};

/// CRUD view state over the membership plan catalog
///
/// Holds the mirrored plan list plus a single editable-record-or-none
/// form. `editing_id` of `None` means the form is creating a new plan;
/// `Some(id)` means it is editing the record with that id, which is
/// always present in the local list.
pub struct CatalogEditor {
    pub(crate) plans: Vec<MembershipPlan>,
    pub name: String,
    pub price: String,
    pub duration: String,
    pub(crate) editing_id: Option<i64>,
    pub(crate) error: Option<String>,
}

impl CatalogEditor {
    pub fn new() -> Self {
        Self {
            plans: Vec::new(),
            name: String::new(),
            price: String::new(),
            duration: String::new(),
            editing_id: None,
            error: None,
        }
    }

    /// Mirrored plan list
    pub fn plans(&self) -> &[MembershipPlan] {
        &self.plans
    }

    /// Id of the record open for editing; `None` while creating
    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Inline message from the last failed operation
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the catalog
    ///
    /// Load failures are logged and keep the previous list; only
    /// mutation failures surface inline.
    pub async fn load(&mut self, client: &ApiClient) {
        match client.list_plans().await {
            Ok(plans) => self.plans = plans,
            Err(err) => log::error!("failed to load membership plans: {}", err),
        }
    }

    /// Populate the form from the record with `id`
    ///
    /// Returns false when the id is not in the local list, leaving the
    /// form untouched.
    pub fn start_edit(&mut self, id: i64) -> bool {
        let Some(plan) = self.plans.iter().find(|p| p.id == id) else {
            return false;
        };

        self.name = plan.name.clone();
        self.price = plan.price.clone();
        self.duration = plan.duration_days.to_string();
        self.editing_id = Some(id);
        true
    }

    /// Clear the form and return to creating
    pub fn cancel(&mut self) {
        self.name.clear();
        self.price.clear();
        self.duration.clear();
        self.editing_id = None;
    }

    /// Validate the form, then send the create or update request
    ///
    /// A validation failure surfaces inline and issues no request. On
    /// success the local list is patched from the server's record
    /// (append on create, replace-by-id on update) and the form resets
    /// to creating. On a server failure the form keeps its values so
    /// the clerk can correct and resubmit.
    pub async fn submit(&mut self, client: &ApiClient) -> bool {
        self.error = None;

        let (name, price, duration_days) = match self.parse_form() {
            Ok(fields) => fields,
            Err(err) => {
                self.error = Some(err.message());
                return false;
            }
        };

        let result = match self.editing_id {
            Some(id) => client.update_plan(id, &name, &price, duration_days).await,
            None => client.create_plan(&name, &price, duration_days).await,
        };

        match result {
            Ok(saved) => {
                match self.editing_id {
                    Some(id) => {
                        if let Some(entry) = self.plans.iter_mut().find(|p| p.id == id) {
                            *entry = saved;
                        }
                    }
                    None => self.plans.push(saved),
                }
                self.cancel();
                true
            }
            Err(err) => {
                log::error!("failed to save membership plan: {}", err);
                self.error = Some(failure_text(&err, "Error al guardar la membresía."));
                false
            }
        }
    }

    /// Delete the record with `id`
    ///
    /// The console confirms with the clerk before calling this. On
    /// success the entry is removed from the local list; if it was the
    /// record open for editing, the form resets rather than keep values
    /// from a record that no longer exists.
    pub async fn delete(&mut self, client: &ApiClient, id: i64) -> bool {
        self.error = None;

        match client.delete_plan(id).await {
            Ok(()) => {
                self.plans.retain(|p| p.id != id);
                if self.editing_id == Some(id) {
                    self.cancel();
                }
                true
            }
            Err(err) => {
                log::error!("failed to delete membership plan {}: {}", id, err);
                self.error = Some(failure_text(&err, "Error al borrar."));
                false
            }
        }
    }

    fn parse_form(&self) -> CoreResult<(String, String, i64)> {
        let name = require_text(&self.name, "nombre")?;
        let price = parse_price(&self.price)?;
        let duration_days = parse_duration(&self.duration)?;
        Ok((name, price, duration_days))
    }
}

impl Default for CatalogEditor {
    fn default() -> Self {
        Self::new()
    }
}
