mod signal;

use gym_core::{MembershipAssignment, MembershipPlan};

use chrono::NaiveDate;

pub(crate) fn plan(id: i64, name: &str, price: &str, duration_days: i64) -> MembershipPlan {
    MembershipPlan {
        id,
        name: name.to_string(),
        price: price.to_string(),
        duration_days,
        image: None,
    }
}

pub(crate) fn assignment(
    id: i64,
    user_name: &str,
    user_full_name: Option<&str>,
    membership_name: &str,
    is_active: bool,
) -> MembershipAssignment {
    MembershipAssignment {
        id,
        user: Some(id),
        user_name: user_name.to_string(),
        user_full_name: user_full_name.map(String::from),
        membership_type: Some(1),
        membership_name: membership_name.to_string(),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 2, 1),
        is_active,
    }
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
