use crate::RefreshSignal;

use gym_client::ApiClient;
use gym_core::MembershipAssignment;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

/// Read-only projection of the assignment collection
///
/// Applies a client-side case-insensitive substring search across four
/// derived fields at once: user handle, full name when present, plan
/// name, and the localized status word. Subscribes to the refresh
/// signal at construction and re-fetches when it fires.
pub struct StatusBoard {
    pub(crate) assignments: Vec<MembershipAssignment>,
    pub search_term: String,
    refresh_rx: broadcast::Receiver<()>,
}

impl StatusBoard {
    pub fn new(signal: &RefreshSignal) -> Self {
        Self {
            assignments: Vec::new(),
            search_term: String::new(),
            refresh_rx: signal.subscribe(),
        }
    }

    /// Unfiltered assignment collection
    pub fn assignments(&self) -> &[MembershipAssignment] {
        &self.assignments
    }

    /// Fetch the full collection; failures are logged and keep the
    /// previous rows
    pub async fn refresh(&mut self, client: &ApiClient) {
        match client.list_assignments().await {
            Ok(assignments) => self.assignments = assignments,
            Err(err) => log::error!("failed to load assignments: {}", err),
        }
    }

    /// Re-fetch when the refresh signal has fired since the last check
    ///
    /// Returns whether a fetch happened.
    pub async fn sync(&mut self, client: &ApiClient) -> bool {
        if !self.signal_pending() {
            return false;
        }

        self.refresh(client).await;
        true
    }

    /// Rows matching the search term
    ///
    /// A record is included when the term, lowercased, is a substring
    /// of any of the four derived fields. The empty term matches every
    /// record.
    pub fn visible_rows(&self) -> Vec<&MembershipAssignment> {
        let term = self.search_term.to_lowercase();
        self.assignments
            .iter()
            .filter(|a| {
                a.user_name.to_lowercase().contains(&term)
                    || a.user_full_name
                        .as_ref()
                        .is_some_and(|name| name.to_lowercase().contains(&term))
                    || a.membership_name.to_lowercase().contains(&term)
                    || a.status_word().contains(&term)
            })
            .collect()
    }

    /// Placeholder text when no rows are visible: one wording for an
    /// empty collection, another when the search came up empty
    pub fn empty_state(&self) -> Option<&'static str> {
        if !self.visible_rows().is_empty() {
            return None;
        }

        if self.search_term.is_empty() {
            Some("No hay membresías asignadas aún.")
        } else {
            Some("No se encontraron resultados para tu búsqueda.")
        }
    }

    fn signal_pending(&mut self) -> bool {
        let mut pending = false;
        loop {
            match self.refresh_rx.try_recv() {
                Ok(()) | Err(TryRecvError::Lagged(_)) => pending = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        pending
    }
}
