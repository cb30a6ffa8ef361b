//! CLI argument definitions for taskpad.

use crate::models::{Priority, Tag};
use clap::{Parser, Subcommand};

/// Version string enriched with build metadata from build.rs.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TP_GIT_COMMIT"),
    ", built ",
    env!("TP_BUILD_TIMESTAMP"),
    ")"
);

/// Taskpad - a local todo manager.
///
/// Todos live in a single JSON blob under your data directory; every
/// command reads the whole collection, applies one change, and writes it
/// back.
#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, long_version = LONG_VERSION, about = "A CLI todo manager", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Store data under <path> instead of the platform data directory.
    /// Can also be set via the TP_DATA_DIR environment variable.
    #[arg(long = "data-dir", global = true, env = "TP_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up the todo collection if it does not exist yet
    Init,

    /// Create a new todo
    Add {
        /// Todo title (must not be empty)
        title: String,

        /// Detailed description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Priority (default from config, else medium)
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,

        /// Category tag (default from config, else personal)
        #[arg(short, long, value_enum)]
        tag: Option<Tag>,

        /// Due date, YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,

        /// Reminder, "YYYY-MM-DD HH:MM"
        #[arg(long)]
        reminder: Option<String>,
    },

    /// List todos, optionally filtered
    List {
        /// Only todos with this tag
        #[arg(short, long, value_enum)]
        tag: Option<Tag>,

        /// Only todos with this priority
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,

        /// Only completed todos
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Only pending todos
        #[arg(long)]
        pending: bool,
    },

    /// Show one todo by ID
    Show {
        /// Todo ID (e.g., td-a1b2c3d4)
        id: String,
    },

    /// Flip a todo between pending and completed
    Toggle {
        /// Todo ID
        id: String,
    },

    /// Delete one todo
    Delete {
        /// Todo ID
        id: String,
    },

    /// Delete every todo
    Clear,
}
