use serde::Deserialize;

/// Success body of an assignment creation.
///
/// The endpoint may attach a human-readable `message` (e.g. telling the
/// clerk whether the membership was assigned or renewed); everything else
/// in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct AssignmentReceipt {
    #[serde(default)]
    pub message: Option<String>,
}
