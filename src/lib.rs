//! lotto-ticket - a small record keeper for lottery tickets
//!
//! Tickets carry a date, a product label and six numbers. They are kept in
//! memory by a [`storage::TicketManager`], which assigns ids and persists the
//! whole set to a CSV file.
//!
//! # Example
//!
//! ```rust,no_run
//! use lotto_ticket::storage::{NewTicket, TicketManager};
//!
//! let mut manager = TicketManager::new();
//! manager.load_from("product.csv")?;
//!
//! let ticket = manager.create_auto(NewTicket {
//!     product: Some("Lotto".to_string()),
//!     ..NewTicket::default()
//! })?;
//! println!("{}", ticket.describe());
//!
//! manager.save_to("product.csv")?;
//! # Ok::<(), lotto_ticket::LottoTicketError>(())
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::indexing_slicing)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{LottoTicketError, Result};
