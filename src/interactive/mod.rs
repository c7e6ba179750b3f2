//! Interactive prompts for lotto-ticket
//!
//! Collects menu choices and ticket fields from the terminal. The prompts
//! only gather raw text; parsing and validation happen in the handlers.

use crate::error::{LottoTicketError, Result};
use crate::storage::NumberRange;
use dialoguer::{Input, theme::ColorfulTheme};
use std::fmt;
use std::str::FromStr;

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTicket,
    ListTickets,
    SaveTickets,
    SearchTicket,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [Self; 5] = [
        Self::AddTicket,
        Self::ListTickets,
        Self::SaveTickets,
        Self::SearchTicket,
        Self::Exit,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::AddTicket => "1",
            Self::ListTickets => "2",
            Self::SaveTickets => "3",
            Self::SearchTicket => "4",
            Self::Exit => "5",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AddTicket => "Add Auto Ticket",
            Self::ListTickets => "List All products",
            Self::SaveTickets => "Save products to CSV",
            Self::SearchTicket => "Search Ticket by ID",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = LottoTicketError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == s)
            .ok_or_else(|| LottoTicketError::validation(format!("unknown menu choice '{s}'")))
    }
}

/// Raw answers for a new ticket
#[derive(Debug, Clone, Default)]
pub struct TicketInput {
    pub date: String,
    pub product: String,
    pub numbers: String,
    /// Only asked for when `numbers` was left blank
    pub range: Option<NumberRange>,
}

/// Terminal prompts used by the menu
pub struct InteractiveMode {
    theme: ColorfulTheme,
}

impl Default for InteractiveMode {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveMode {
    /// Create a new interactive mode handler
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Print the menu and read a choice
    ///
    /// Returns `None` when the answer is not a menu entry.
    pub fn select_action(&self) -> Result<Option<MenuChoice>> {
        println!("\nTicket Manager Menu");
        for choice in MenuChoice::ALL {
            println!("{choice}");
        }

        let answer = self.text("Enter your choice")?;
        Ok(answer.parse().ok())
    }

    /// Ask for the fields of a new `Auto` ticket
    ///
    /// `defaults` pre-fills the random range prompts.
    pub fn ticket_input(&self, defaults: NumberRange) -> Result<TicketInput> {
        let date = self.text("Enter Date (YYYY-MM-DD) or press Enter for today's date")?;
        let product = self.text("Enter product")?;
        let numbers = self.text(
            "Enter setnumber (6 comma-separated values or press Enter to generate random numbers)",
        )?;

        let range = if numbers.trim().is_empty() {
            let min = Input::<i64>::with_theme(&self.theme)
                .with_prompt("Enter minimum value for random setnumber")
                .default(defaults.min)
                .interact_text()?;
            let max = Input::<i64>::with_theme(&self.theme)
                .with_prompt("Enter maximum value for random setnumber")
                .default(defaults.max)
                .interact_text()?;
            Some(NumberRange { min, max })
        } else {
            None
        };

        Ok(TicketInput {
            date,
            product,
            numbers,
            range,
        })
    }

    /// Ask for the id to search for
    pub fn ticket_id(&self) -> Result<String> {
        Ok(self.text("Enter the ticket ID to search")?.trim().to_string())
    }

    fn text(&self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(Into::into)
    }
}
