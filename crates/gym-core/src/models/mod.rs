pub mod assignment_receipt;
pub mod membership_assignment;
pub mod membership_plan;
pub mod payment_method;
pub mod user_account;
