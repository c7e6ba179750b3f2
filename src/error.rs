//! Error types for lotto-ticket
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is [`LottoTicketError`]. The variants follow the taxonomy the store cares
//! about: bad user input, records that cannot be rebuilt from disk, and
//! storage failures that the caller reports and survives.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LottoTicketError>;

/// Errors produced by lotto-ticket
#[derive(Error, Debug)]
pub enum LottoTicketError {
    /// User input was rejected before any state changed
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A ticket could not be added to the store
    #[error("Invalid ticket: {0}")]
    InvalidRecord(String),

    /// A persisted row could not be turned back into a ticket
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Opening, reading or writing the data file failed
    #[error("Failed to {action} '{}': {source}", path.display())]
    Storage {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Saving would drop rows that were skipped on load
    #[error("Refusing to rewrite '{}': {skipped} row(s) in it were not loaded", path.display())]
    PartialLoad { path: PathBuf, skipped: usize },

    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Custom(String),
}

impl LottoTicketError {
    /// Create a custom error from any displayable message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Shorthand for a row that failed to deserialize
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Message shown to the user on the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage { action, path, .. } => {
                format!("Could not {action} '{}'", path.display())
            },
            _ => self.to_string(),
        }
    }

    /// Hints for fixing the error, if any
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(_) => vec![
                "Dates use the YYYY-MM-DD format".to_string(),
                "Enter exactly 6 comma-separated numbers, or leave blank for random ones"
                    .to_string(),
            ],
            Self::MalformedRecord { .. } => vec![
                "Fix or remove the offending row in the data file".to_string(),
                "Set storage.skip_malformed_rows = true to load the remaining rows".to_string(),
            ],
            Self::Storage { .. } => vec![
                "Check that the file exists and is readable".to_string(),
                "Use --file to point at a different data file".to_string(),
            ],
            Self::PartialLoad { .. } => vec![
                "Fix or remove the rows that could not be loaded".to_string(),
                "Use --file to add the ticket to a different data file".to_string(),
            ],
            Self::TicketNotFound { .. } => {
                vec!["Run 'lotto-ticket list' to see existing tickets".to_string()]
            },
            Self::Config(_) => vec![
                "Check lotto-ticket.toml and LOTTO_TICKET_* environment variables".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Whether the process can keep running after this error
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidRecord(_)
                | Self::MalformedRecord { .. }
                | Self::Storage { .. }
                | Self::PartialLoad { .. }
                | Self::TicketNotFound { .. }
        )
    }

    /// Whether the error came from loading configuration
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
