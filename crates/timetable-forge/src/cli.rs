use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ttf_core::OutputFormat;

#[derive(Parser)]
#[command(name = "ttf")]
#[command(about = "Timetable Forge: multi-division academic timetable generation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Generator config file
    #[arg(long, default_value = "ttf.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a timetable from a JSON request file
    Generate {
        /// Path to the scheduling request (JSON)
        request: PathBuf,

        /// Extra free-text constraint (repeatable)
        #[arg(short = 'c', long = "constraint")]
        constraints: Vec<String>,

        /// Print the result without persisting it
        #[arg(long)]
        no_store: bool,
    },

    /// Re-run generation from a stored timetable with extra constraints
    Regenerate {
        /// Timetable ID, unique prefix, or 'latest'
        id: String,

        /// Extra free-text constraint (repeatable)
        #[arg(short = 'c', long = "constraint")]
        constraints: Vec<String>,

        /// Print the result without persisting it
        #[arg(long)]
        no_store: bool,
    },

    /// Show a stored timetable
    Show {
        /// Timetable ID, unique prefix, or 'latest'
        id: String,
    },

    /// List stored timetables, newest first
    List,

    /// Delete a stored timetable
    Delete {
        /// Timetable ID or unique prefix
        id: String,
    },

    /// Validate a timetable file against its own request data
    Validate {
        /// Path to a stored timetable (JSON)
        file: PathBuf,
    },

    /// Aggregate stats over the store
    Stats,
}
