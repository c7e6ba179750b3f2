//! lotto-ticket - lottery ticket record keeper
//!
//! This is the main entry point for the lotto-ticket CLI application.
//! It handles command-line argument parsing and dispatches to the appropriate
//! command handlers.

use clap::Parser;
use lotto_ticket::cli::handlers::{
    AddParams, HandlerContext, handle_add_command, handle_list_command, handle_menu_command,
    handle_show_command,
};
use lotto_ticket::cli::{Cli, Commands, OutputFormatter};
use lotto_ticket::error::{LottoTicketError, Result};
use std::process;
use tracing_subscriber::EnvFilter;

/// Main entry point for the lotto-ticket CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful error messages to users.
fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    init_logging(cli.verbose);

    let mut ctx = HandlerContext::new(cli.file, cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => handle_menu_command(&mut ctx, formatter),
        Commands::Add {
            date,
            product,
            numbers,
            min,
            max,
        } => handle_add_command(
            AddParams {
                date,
                product,
                numbers,
                min,
                max,
            },
            &mut ctx,
            formatter,
        ),
        Commands::List => handle_list_command(&mut ctx, formatter),
        Commands::Show { id } => handle_show_command(&id, &mut ctx, formatter),
    }
}

/// Install the tracing subscriber
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting
/// to warnings only. Logs go to stderr so JSON output stays clean.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle errors and display them to the user
///
/// This function formats errors in a user-friendly way, including:
/// - The main error message
/// - Any suggestions for fixing the error
/// - Additional context in verbose mode
fn handle_error(error: &LottoTicketError, formatter: &OutputFormatter) {
    // In JSON mode, output error as JSON
    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": error.suggestions(),
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
        return;
    }

    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    // In verbose mode, show the full error chain
    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let _cli = Cli::parse_from(["lotto-ticket"]);
        let _cli = Cli::parse_from(["lotto-ticket", "list"]);
        let _cli = Cli::parse_from(["lotto-ticket", "show", "1"]);
        let _cli = Cli::parse_from(["lotto-ticket", "add", "--numbers", "1,2,3,4,5,6"]);
    }
}
