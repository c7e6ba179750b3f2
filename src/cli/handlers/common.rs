use crate::cli::OutputFormatter;
use crate::config::Config;
use crate::core::parse_date;
use crate::error::{LottoTicketError, Result};
use crate::storage::{LoadReport, NewTicket, NumberRange, TicketManager};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Common context for all handler operations
pub struct HandlerContext {
    pub config: Config,
    pub data_file: PathBuf,
    pub manager: TicketManager,
    /// The last load left rows of the data file out of `manager`
    partial_load: bool,
}

impl HandlerContext {
    /// Create a new handler context
    ///
    /// `file` overrides the configured data file. Nothing is loaded yet.
    pub fn new(file: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;
        Ok(Self::from_config(config, file))
    }

    pub fn from_config(config: Config, file: Option<PathBuf>) -> Self {
        let data_file = file.unwrap_or_else(|| config.storage.file.clone());
        let manager = TicketManager::with_policy(config.load_policy());
        Self {
            config,
            data_file,
            manager,
            partial_load: false,
        }
    }

    /// Load the data file, treating a missing or unreadable file as empty
    ///
    /// The storage failure is shown as a warning. Rows that were skipped are
    /// reported as warnings; a malformed row under the abort policy is
    /// returned to the caller.
    pub fn load_tickets(&mut self, formatter: &OutputFormatter) -> Result<LoadReport> {
        match self.manager.load_from(&self.data_file) {
            Ok(report) => {
                self.partial_load = report.skipped_unsupported > 0 || report.malformed > 0;
                if report.skipped_unsupported > 0 {
                    formatter.warning(&format!(
                        "Skipped {} row(s) with an unsupported ticket type in {}",
                        report.skipped_unsupported,
                        self.data_file.display()
                    ));
                }
                if report.malformed > 0 {
                    formatter.warning(&format!(
                        "Skipped {} malformed row(s) in {}",
                        report.malformed,
                        self.data_file.display()
                    ));
                }
                Ok(report)
            },
            Err(e @ LottoTicketError::Storage { .. }) => {
                self.partial_load = false;
                formatter.warning(&e.user_message());
                Ok(LoadReport::default())
            },
            Err(e) => {
                self.partial_load = true;
                Err(e)
            },
        }
    }

    /// Whether saving now would drop rows the last load did not keep
    pub const fn is_partial_load(&self) -> bool {
        self.partial_load
    }

    /// Save the data file
    ///
    /// Warns first when the file holds rows that were not loaded, since they
    /// are not written back.
    pub fn save_tickets(&mut self, formatter: &OutputFormatter) -> Result<()> {
        if self.partial_load {
            formatter.warning(&format!(
                "{} had rows that were not loaded; they are dropped by this save",
                self.data_file.display()
            ));
        }
        let count = self.manager.save_to(&self.data_file)?;
        self.partial_load = false;
        formatter.success(&format!(
            "Saved {count} ticket(s) to {}.",
            self.data_file.display()
        ));
        Ok(())
    }

    /// Random range from configuration, with optional overrides
    ///
    /// Not validated here; an inverted range is only an error when numbers
    /// are actually drawn from it.
    pub fn number_range(&self, min: Option<i64>, max: Option<i64>) -> NumberRange {
        let configured = self.config.number_range();
        NumberRange {
            min: min.unwrap_or(configured.min),
            max: max.unwrap_or(configured.max),
        }
    }
}

/// Parse a date entered by the user; blank means today
pub fn parse_date_input(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    parse_date(input).map(Some)
}

/// Parse a product label; blank means the default label
pub fn parse_product_input(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

/// Parse comma-separated numbers; blank means random numbers
///
/// Each value is trimmed. The count is checked when the ticket is created.
pub fn parse_numbers_input(input: &str) -> Option<Vec<String>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.split(',').map(|v| v.trim().to_string()).collect())
}

/// Build a ticket request from raw text fields
pub fn new_ticket_from_input(
    date: &str,
    product: &str,
    numbers: &str,
    range: NumberRange,
) -> Result<NewTicket> {
    Ok(NewTicket {
        date: parse_date_input(date)?,
        product: parse_product_input(product),
        numbers: parse_numbers_input(numbers),
        range,
    })
}
