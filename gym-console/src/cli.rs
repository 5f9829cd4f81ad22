use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gym")]
#[command(about = "Membership admin console for the gym REST API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// View to open; the plan catalog when omitted
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// API base URL (overrides config.toml and GYM_API_BASE_URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,
}
