//! Line-oriented prompting for the interactive views.

use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line. `None` on end of input
/// (Ctrl-D) or a read failure, which callers treat as leaving the view.
pub fn read_line(label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            log::error!("failed to read stdin: {}", err);
            None
        }
    }
}

/// Prompt showing the current value; an empty answer keeps it.
pub fn read_line_or(label: &str, current: &str) -> Option<String> {
    let input = read_line(&format!("{} [{}]: ", label, current))?;
    Some(if input.is_empty() {
        current.to_string()
    } else {
        input
    })
}

/// Yes/no confirmation, `s` for sí. Anything else, or end of input,
/// counts as no.
pub fn confirm(label: &str) -> bool {
    match read_line(&format!("{} (s/N): ", label)) {
        Some(answer) => {
            let answer = answer.to_lowercase();
            answer == "s" || answer == "si" || answer == "sí"
        }
        None => false,
    }
}
