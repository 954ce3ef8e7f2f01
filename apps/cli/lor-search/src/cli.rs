//! Command line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lor-search", version, about = "LoR character search client")]
pub struct Cli {
    /// Directory for lor-search.log (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the character catalog
    Search(QueryArgs),

    /// List all SearchLists with their saved searches
    Lists,

    /// Create a new, empty SearchList
    CreateList {
        /// Name of the list; must be unique on the backend
        name: String,
    },

    /// Save a search into an existing SearchList
    AddSearch {
        /// Id of the target SearchList
        list_id: u64,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Run the CSRF handshake and report whether a token was issued
    Csrf,
}

#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    /// Text to look for
    #[arg(long)]
    pub term: Option<String>,

    /// Character attribute to search in, e.g. `name` (required with --term)
    #[arg(long)]
    pub field: Option<String>,
}
