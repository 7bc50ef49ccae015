use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List active users, one page at a time
    List {
        /// Only users whose names, email or phone contain this text
        #[arg(long)]
        search: Option<String>,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Users per page (defaults to client.page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Get a user by ID
    Get {
        /// User ID
        id: i64,
    },

    /// Create a user
    Create {
        #[command(flatten)]
        fields: UserArgs,
    },

    /// Replace every field of a user
    Update {
        /// User ID
        id: i64,
        #[command(flatten)]
        fields: UserArgs,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: i64,
    },

    /// Export active users as CSV
    Export {
        /// Only users matching this text
        #[arg(long)]
        search: Option<String>,
        /// File or directory to write to; prints to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
pub(crate) struct UserArgs {
    #[arg(long)]
    pub(crate) given_names: String,
    #[arg(long)]
    pub(crate) surnames: String,
    #[arg(long)]
    pub(crate) phone: String,
    #[arg(long)]
    pub(crate) email: String,
}
