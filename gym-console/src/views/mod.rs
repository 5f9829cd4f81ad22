//! Interactive screens, one per console view.
//!
//! Each screen is a prompt/render loop over its view-state model from
//! `gym-views`; all list-patching and validation rules live in the
//! models, the loops only read input and print.

pub(crate) mod assign;
pub(crate) mod plans;
pub(crate) mod register;
pub(crate) mod status;

use gym_core::{MembershipAssignment, MembershipPlan};

pub(crate) fn render_plan_table(plans: &[MembershipPlan]) {
    println!(
        "{:<6} {:<24} {:>12} {:>12}",
        "ID", "Nombre", "Precio", "Duración"
    );
    for plan in plans {
        println!(
            "{:<6} {:<24} {:>12} {:>12}",
            plan.id,
            plan.name,
            format!("${}", plan.price),
            format!("{} días", plan.duration_days),
        );
    }
}

pub(crate) fn render_assignment_table(rows: &[&MembershipAssignment]) {
    println!(
        "{:<20} {:<20} {:<12} {:<12} {:<8}",
        "Usuario", "Membresía", "Inicio", "Vencimiento", "Estado"
    );
    for row in rows {
        let user = row
            .user_full_name
            .as_deref()
            .unwrap_or(row.user_name.as_str());
        println!(
            "{:<20} {:<20} {:<12} {:<12} {:<8}",
            user,
            row.membership_name,
            row.start_date,
            row.end_date,
            row.status_badge(),
        );
    }
}
