use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pastebox")]
#[command(version)]
#[command(about = "Local-first paste manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use a specific data directory instead of the platform default
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new paste
    #[command(alias = "n")]
    New {
        /// Title of the paste (optional, opens the editor if not provided)
        #[arg(required = false)]
        title: Option<String>,

        /// Content of the paste
        #[arg(required = false)]
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List pastes
    #[command(alias = "ls")]
    List {
        /// Filter by title (case-insensitive substring)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View a paste in full
    #[command(alias = "v")]
    View {
        /// Id of the paste
        id: String,
    },

    /// Edit a paste
    #[command(alias = "e")]
    Edit {
        /// Id of the paste
        id: String,

        /// New title (defaults to the current one)
        #[arg(long)]
        title: Option<String>,

        /// New content (defaults to the current one)
        #[arg(long)]
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Delete one or more pastes
    #[command(alias = "rm")]
    Delete {
        /// Ids of the pastes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Copy a paste's content to the clipboard
    #[command(alias = "cp")]
    Copy {
        /// Id of the paste
        id: String,
    },

    /// Print share links for a paste
    Share {
        /// Id of the paste
        id: String,
    },

    /// Delete every paste and the data file itself
    Clear {
        /// Skip confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., share-url)
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },
}
