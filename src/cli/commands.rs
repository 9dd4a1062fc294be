//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(about = "Personal journal in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add an entry; opens your editor when TEXT is omitted
    Add {
        /// Entry text (joined with spaces)
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// List saved entries in the order they were written
    List {
        /// Show only the N most recent entries
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Show newest entries first
        #[arg(short, long)]
        reverse: bool,
    },

    /// Remove an entry by id
    Remove {
        /// Entry id as shown by 'jotter list'
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
