use crate::token_commands::TokenCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Membership plan catalog editor (the default view)
    Plans,

    /// Register a new customer with their first membership
    Register,

    /// Assign or renew a membership for an existing customer
    Assign,

    /// Assignment status table
    Status,

    /// Stored API token operations
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },
}
