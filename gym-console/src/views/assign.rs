use crate::prompt;
use crate::views::render_assignment_table;

use gym_client::ApiClient;
use gym_core::MembershipPlan;
use gym_views::{AssignmentForm, RefreshSignal, StatusBoard, resolve_image_url};

/// Assignment loop: bind an existing customer to a plan. After each
/// successful assignment the status table re-fetches off the refresh
/// signal and is shown inline.
pub async fn run(client: &ApiClient, signal: &RefreshSignal) {
    let mut form = AssignmentForm::new(signal);
    let mut board = StatusBoard::new(signal);
    form.load(client).await;

    loop {
        println!();
        println!("=== Asignar Membresía ===");
        println!("Clientes:");
        for user in form.users() {
            println!("  {}. {}", user.id, user.option_label());
        }
        let Some(choice) = prompt::read_line("Cliente (id, q = salir): ") else {
            break;
        };
        if choice == "q" {
            break;
        }
        form.selected_user = choice.parse().ok();

        render_plan_cards(form.plans(), form.selected_plan, &client.base_url);
        let Some(choice) = prompt::read_line("Membresía (id): ") else {
            break;
        };
        form.selected_plan = choice.parse().ok();

        if form.submit(client).await {
            println!("{}", form.notice().unwrap_or("Operación exitosa"));
            if board.sync(client).await {
                println!();
                render_assignment_table(&board.visible_rows());
            }
        } else if let Some(error) = form.error() {
            println!("! {}", error);
        }

        if !prompt::confirm("¿Asignar otra membresía?") {
            break;
        }
    }
}

/// Render the plans as selectable cards: label plus the resolved image
/// reference, with the selected card marked.
fn render_plan_cards(plans: &[MembershipPlan], selected: Option<i64>, base_url: &str) {
    println!("Membresías:");
    for plan in plans {
        let marker = if selected == Some(plan.id) { ">" } else { " " };
        let image = plan
            .image
            .as_deref()
            .map(|image| resolve_image_url(base_url, image))
            .unwrap_or_else(|| "Sin Imagen".to_string());
        println!(" {} {}. {}", marker, plan.id, plan.option_label());
        println!("      {}", image);
    }
}
