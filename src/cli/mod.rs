//! Command-line interface
//!
//! Argument definitions live here; the work for each subcommand is done in
//! [`handlers`].

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keep a record of lottery tickets in a CSV file
#[derive(Parser, Debug)]
#[command(name = "lotto-ticket", version, about, long_about = None)]
pub struct Cli {
    /// Data file to load and save (overrides storage.file)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Configuration file to use instead of ./lotto-ticket.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Add an Auto ticket and save the data file
    Add {
        /// Ticket date in YYYY-MM-DD format (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Product label (defaults to "Unknown")
        #[arg(long)]
        product: Option<String>,

        /// Six comma-separated numbers (random when omitted)
        #[arg(long)]
        numbers: Option<String>,

        /// Lower bound for random numbers
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Upper bound for random numbers
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
    },

    /// List all tickets
    List,

    /// Show a ticket by ID
    Show {
        /// Ticket ID
        id: String,
    },
}
