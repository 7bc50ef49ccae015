use crate::commands::Commands;

use clap::Parser;

/// `ud` talks to a running user directory server. Connection settings come
/// from the `[client]` section of the config file; the global flags below
/// override them for one invocation.
#[derive(Parser)]
#[command(name = "ud", version, propagate_version = true)]
#[command(about = "Manage the user directory from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL, e.g. http://localhost:8000
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) server: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// Indent JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
