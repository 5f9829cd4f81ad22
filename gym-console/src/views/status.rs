use crate::prompt;
use crate::views::render_assignment_table;

use gym_client::ApiClient;
use gym_views::{RefreshSignal, StatusBoard};

/// Status table loop: read-only view of every assignment with a
/// client-side search across user, plan, and status.
pub async fn run(client: &ApiClient, signal: &RefreshSignal) {
    let mut board = StatusBoard::new(signal);
    board.refresh(client).await;

    loop {
        board.sync(client).await;

        println!();
        println!("=== Estado de Membresías ===");
        if !board.search_term.is_empty() {
            println!("Búsqueda: \"{}\"", board.search_term);
        }
        match board.empty_state() {
            Some(text) => println!("{}", text),
            None => render_assignment_table(&board.visible_rows()),
        }
        println!("[b <texto>] buscar  [b] limpiar búsqueda  [r] recargar  [q] salir");

        let Some(input) = prompt::read_line("> ") else {
            break;
        };
        let (command, arg) = match input.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (input.as_str(), ""),
        };

        match command {
            "q" => break,
            "r" => board.refresh(client).await,
            "b" => board.search_term = arg.to_string(),
            "" => {}
            other => println!("Comando no reconocido: {}", other),
        }
    }
}
