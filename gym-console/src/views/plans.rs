use crate::prompt;
use crate::views::render_plan_table;

use gym_client::ApiClient;
use gym_views::CatalogEditor;

/// Catalog editor loop: list, create, edit, and delete membership
/// plans. This is the view a bare `gym` opens.
pub async fn run(client: &ApiClient) {
    let mut editor = CatalogEditor::new();
    editor.load(client).await;

    loop {
        println!();
        println!("=== Membresías ===");
        if editor.plans().is_empty() {
            println!("(sin membresías)");
        } else {
            render_plan_table(editor.plans());
        }
        if let Some(error) = editor.error() {
            println!("! {}", error);
        }
        println!("[a] agregar  [e <id>] editar  [d <id>] eliminar  [r] recargar  [q] salir");

        let Some(input) = prompt::read_line("> ") else {
            break;
        };
        let (command, arg) = match input.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (input.as_str(), ""),
        };

        match command {
            "q" => break,
            "r" => editor.load(client).await,
            "a" => {
                if fill_form(&mut editor).is_none() {
                    break;
                }
                if editor.submit(client).await {
                    println!("Membresía guardada.");
                }
            }
            "e" => {
                let Ok(id) = arg.parse::<i64>() else {
                    println!("Indica el id: e <id>");
                    continue;
                };
                if !editor.start_edit(id) {
                    println!("No existe la membresía {}.", id);
                    continue;
                }
                if fill_form(&mut editor).is_none() {
                    editor.cancel();
                    break;
                }
                if editor.submit(client).await {
                    println!("Membresía actualizada.");
                }
            }
            "d" => {
                let Ok(id) = arg.parse::<i64>() else {
                    println!("Indica el id: d <id>");
                    continue;
                };
                if !prompt::confirm("¿Estás seguro de eliminar esta membresía?") {
                    continue;
                }
                if editor.delete(client, id).await {
                    println!("Membresía eliminada.");
                }
            }
            "" => {}
            other => println!("Comando no reconocido: {}", other),
        }
    }
}

/// Prompt the three form fields into the editor. When editing, the
/// current values show as defaults and an empty answer keeps them.
fn fill_form(editor: &mut CatalogEditor) -> Option<()> {
    editor.name = prompt::read_line_or("Nombre", &editor.name)?;
    editor.price = prompt::read_line_or("Precio", &editor.price)?;
    editor.duration = prompt::read_line_or("Duración (días)", &editor.duration)?;
    Some(())
}
