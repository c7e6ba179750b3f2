//! In-memory ticket store with CSV persistence
//!
//! [`TicketManager`] owns the tickets of one session in insertion order and
//! hands out ids. `next_id` always equals one more than the largest numeric
//! id present, or 1 when the store is empty; it is recomputed after every
//! `add` and `load_from`. Once the largest id is `u64::MAX` there is no next
//! id and `create_auto` fails.

use super::codec::{self, DecodedRow};
use crate::core::{Ticket, TicketBuilder, TicketId};
use crate::error::{LottoTicketError, Result};
use chrono::NaiveDate;
use rand::Rng;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info, warn};

/// Inclusive bounds for randomly drawn numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: i64, max: i64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    fn validate(self) -> Result<()> {
        if self.min > self.max {
            return Err(LottoTicketError::validation(format!(
                "minimum {} is greater than maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    fn draw<R: Rng>(self, rng: &mut R) -> String {
        rng.random_range(self.min..=self.max).to_string()
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self { min: 1, max: 45 }
    }
}

/// Request for a new `Auto` ticket; every field is optional
#[derive(Debug, Clone, Default)]
pub struct NewTicket {
    pub date: Option<NaiveDate>,
    pub product: Option<String>,
    pub numbers: Option<Vec<String>>,
    pub range: NumberRange,
}

/// What `load_from` does with a row that cannot be deserialized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Stop at the first malformed row; rows before it stay loaded
    #[default]
    Abort,
    /// Log the row, count it, and keep reading
    SkipMalformed,
}

/// Summary of a successful load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped_unsupported: usize,
    pub malformed: usize,
}

/// Ticket store
#[derive(Debug)]
pub struct TicketManager {
    tickets: Vec<Ticket>,
    next_id: Option<u64>,
    policy: LoadPolicy,
}

impl Default for TicketManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketManager {
    /// Create an empty store that aborts on malformed rows
    pub const fn new() -> Self {
        Self::with_policy(LoadPolicy::Abort)
    }

    pub const fn with_policy(policy: LoadPolicy) -> Self {
        Self {
            tickets: Vec::new(),
            next_id: Some(1),
            policy,
        }
    }

    /// Id the next created ticket will receive, `None` once ids run out
    pub const fn next_id(&self) -> Option<u64> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Append a ticket
    ///
    /// Fails if a ticket with the same id is already stored; the store is
    /// left unchanged in that case.
    pub fn add(&mut self, ticket: Ticket) -> Result<()> {
        if self.find_by_id(ticket.id().as_str()).is_some() {
            return Err(LottoTicketError::InvalidRecord(format!(
                "a ticket with id {} already exists",
                ticket.id()
            )));
        }
        self.tickets.push(ticket);
        self.update_next_id();
        Ok(())
    }

    /// Create an `Auto` ticket using the thread-local RNG for missing numbers
    pub fn create_auto(&mut self, request: NewTicket) -> Result<&Ticket> {
        self.create_auto_with_rng(request, &mut rand::rng())
    }

    /// Create an `Auto` ticket, drawing missing numbers from `rng`
    ///
    /// Explicit numbers are used as given and never touch `rng`.
    pub fn create_auto_with_rng<R: Rng>(
        &mut self,
        request: NewTicket,
        rng: &mut R,
    ) -> Result<&Ticket> {
        let numbers = match request.numbers {
            Some(numbers) => numbers,
            None => {
                request.range.validate()?;
                (0..crate::core::NUMBER_COUNT)
                    .map(|_| request.range.draw(rng))
                    .collect()
            },
        };

        let id = self
            .next_id
            .ok_or_else(|| LottoTicketError::validation("ticket id space exhausted"))?;
        let mut builder = TicketBuilder::new()
            .id(TicketId::from_value(id))
            .numbers(numbers);
        if let Some(date) = request.date {
            builder = builder.date(date);
        }
        if let Some(product) = request.product {
            builder = builder.product(product);
        }
        let ticket = builder.build()?;

        debug!(id = %ticket.id(), "Created ticket");
        let index = self.tickets.len();
        self.add(ticket)?;
        Ok(&self.tickets[index])
    }

    /// Iterate tickets in insertion order
    pub fn list(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    /// First ticket whose id matches `id` exactly
    pub fn find_by_id(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id().as_str() == id)
    }

    /// Write every ticket to `path`, replacing the file
    ///
    /// Returns the number of tickets written. The in-memory store is never
    /// modified, whatever the outcome.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| LottoTicketError::Storage {
            action: "write",
            path: path.to_path_buf(),
            source,
        })?;

        let written = codec::write_tickets(BufWriter::new(file), &self.tickets)?;
        info!(path = %path.display(), count = written, "Saved tickets");
        Ok(written)
    }

    /// Replace the in-memory tickets with the contents of `path`
    ///
    /// A missing file leaves the store empty. How malformed rows are handled
    /// depends on the store's [`LoadPolicy`].
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        self.tickets.clear();
        self.next_id = Some(1);

        let file = File::open(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Could not open ticket file");
            LottoTicketError::Storage {
                action: "read",
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut report = LoadReport::default();
        let result = self.read_rows(codec::reader(BufReader::new(file)), &mut report);
        self.update_next_id();
        result?;

        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped_unsupported,
            malformed = report.malformed,
            "Loaded tickets"
        );
        Ok(report)
    }

    fn read_rows<R: std::io::Read>(
        &mut self,
        mut reader: csv::Reader<R>,
        report: &mut LoadReport,
    ) -> Result<()> {
        for record in reader.records() {
            let decoded = record
                .map_err(codec::read_error)
                .and_then(|record| codec::decode_row(&record))
                .and_then(|row| self.accept(row));

            match decoded {
                Ok(true) => report.loaded += 1,
                Ok(false) => report.skipped_unsupported += 1,
                Err(err @ LottoTicketError::MalformedRecord { .. })
                    if self.policy == LoadPolicy::SkipMalformed =>
                {
                    warn!(error = %err, "Skipping malformed row");
                    report.malformed += 1;
                },
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Push a decoded row; `Ok(false)` means the row was skipped
    fn accept(&mut self, row: DecodedRow) -> Result<bool> {
        match row {
            DecodedRow::Ticket { line, ticket } => {
                if self.find_by_id(ticket.id().as_str()).is_some() {
                    return Err(LottoTicketError::malformed(
                        line,
                        format!("duplicate ticket id {}", ticket.id()),
                    ));
                }
                self.tickets.push(ticket);
                Ok(true)
            },
            DecodedRow::Unsupported { line, tag } => {
                debug!(line, tag = %tag, "Skipping unsupported ticket type");
                Ok(false)
            },
        }
    }

    fn update_next_id(&mut self) {
        self.next_id = self
            .tickets
            .iter()
            .map(|t| t.id().value())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
    }
}
