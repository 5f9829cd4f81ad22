mod membership_assignment;
mod membership_plan;
mod payment_method;
mod user_account;
