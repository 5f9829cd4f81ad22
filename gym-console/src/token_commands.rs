use clap::Subcommand;
use gym_config::{ConfigErrorResult, CredentialFile};

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Store the API token used by the authorized endpoints
    Set {
        /// Token value, stored verbatim
        value: String,
    },
    /// Show where the token is stored and when it was saved
    Show,
    /// Remove the stored token
    Clear,
}

/// Handle a `gym token ...` invocation.
///
/// These touch only the credential file under the config dir; no client
/// and no network. The token value itself is never printed back.
pub(crate) fn run(action: &TokenCommands) -> ConfigErrorResult<()> {
    match action {
        TokenCommands::Set { value } => {
            let path = CredentialFile::save(value)?;
            println!("Token almacenado en {}", path.display());
        }
        TokenCommands::Show => match CredentialFile::load()? {
            Some(file) => {
                println!("Archivo: {}", CredentialFile::path()?.display());
                println!("Guardado: {}", file.saved_at);
            }
            None => println!("No hay token almacenado."),
        },
        TokenCommands::Clear => {
            if CredentialFile::clear()? {
                println!("Token eliminado.");
            } else {
                println!("No hay token almacenado.");
            }
        }
    }

    Ok(())
}
