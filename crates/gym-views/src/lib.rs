//! gym-views library
//!
//! View-state models for the admin console. Each struct mirrors one
//! view's slice of server state and owns the rules that keep it
//! consistent across create, update, and delete operations: lists are
//! patched in place from mutation responses, form state survives
//! failures, and validation runs before anything touches the network.
//! The models do no terminal I/O; the console binary prompts and
//! renders around them.

pub(crate) mod assign;
pub(crate) mod catalog;
pub(crate) mod register;
pub(crate) mod signal;
pub(crate) mod status;

#[cfg(test)]
mod tests;

pub use assign::{AssignmentForm, resolve_image_url};
pub use catalog::CatalogEditor;
pub use register::RegistrationForm;
pub use signal::RefreshSignal;
pub use status::StatusBoard;

use gym_client::ClientError;

/// Inline text for a failed mutation: the server's own message when it
/// sent one, otherwise the view's stock wording.
pub(crate) fn failure_text(err: &ClientError, fallback: &str) -> String {
    match err.server_message() {
        Some(message) => message.to_string(),
        None => fallback.to_string(),
    }
}
