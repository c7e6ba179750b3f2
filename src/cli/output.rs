//! Output formatting for terminal and JSON modes

use crate::core::Ticket;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Renders messages and tickets either as colored text or as JSON
///
/// In JSON mode only data goes to stdout; success and info messages are
/// suppressed, while warnings and errors still go to stderr.
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{}", message.green());
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Print any serializable value as pretty JSON
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print one ticket
    pub fn print_ticket(&self, ticket: &Ticket) -> Result<()> {
        if self.json {
            self.json(ticket)
        } else {
            println!("{}", ticket.describe());
            Ok(())
        }
    }

    /// Print tickets in order, with a heading in text mode
    pub fn print_tickets<'a, I>(&self, tickets: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Ticket>,
    {
        let tickets: Vec<&Ticket> = tickets.into_iter().collect();
        if self.json {
            return self.json(&tickets);
        }

        println!("{}", "Listing all products:".bold());
        if tickets.is_empty() {
            println!("{}", "No tickets yet.".dimmed());
        }
        for ticket in tickets {
            println!("{}", ticket.describe());
        }
        Ok(())
    }
}
