pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::assignment_receipt::AssignmentReceipt;
pub use models::membership_assignment::MembershipAssignment;
pub use models::membership_plan::MembershipPlan;
pub use models::payment_method::PaymentMethod;
pub use models::user_account::UserAccount;
pub use validation::{parse_duration, parse_price, require_text};
