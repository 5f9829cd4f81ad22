use crate::prompt;

use gym_client::ApiClient;
use gym_core::PaymentMethod;
use gym_views::{RefreshSignal, RegistrationForm};

/// Registration loop: one submission creates the customer account and
/// their first membership together.
pub async fn run(client: &ApiClient, signal: &RefreshSignal) {
    let mut form = RegistrationForm::new(signal);
    form.load_plans(client).await;

    loop {
        println!();
        println!("=== Registrar Cliente ===");
        if fill_form(&mut form).is_none() {
            break;
        }
        println!("Total a pagar: ${}", form.amount_due());

        if prompt::confirm("¿Confirmar registro?") {
            if form.submit(client).await {
                println!("{}", form.notice().unwrap_or("Operación exitosa"));
            } else if let Some(error) = form.error() {
                println!("! {}", error);
            }
        }

        if !prompt::confirm("¿Registrar otro cliente?") {
            break;
        }
    }
}

/// Prompt every registration field. Values entered on a failed attempt
/// stay as defaults so the clerk corrects instead of retyping.
fn fill_form(form: &mut RegistrationForm) -> Option<()> {
    form.username = prompt::read_line_or("Usuario", &form.username)?;
    form.email = prompt::read_line_or("Correo", &form.email)?;
    form.password = prompt::read_line_or("Contraseña", &form.password)?;
    form.first_name = prompt::read_line_or("Nombre", &form.first_name)?;
    form.last_name = prompt::read_line_or("Apellidos", &form.last_name)?;

    println!("Membresías:");
    for plan in form.plans() {
        println!("  {}. {}", plan.id, plan.option_label());
    }
    let choice = prompt::read_line("Membresía (id): ")?;
    if !choice.is_empty() {
        form.membership_id = choice.parse().ok();
    }

    println!("Formas de pago:");
    for (index, method) in PaymentMethod::ALL.iter().enumerate() {
        println!("  {}. {}", index + 1, method.label());
    }
    let choice = prompt::read_line("Forma de pago [1]: ")?;
    form.payment_method = match choice.as_str() {
        "" | "1" => PaymentMethod::Cash,
        "2" => PaymentMethod::Card,
        "3" => PaymentMethod::Transfer,
        other => other.parse().unwrap_or_default(),
    };

    Some(())
}
