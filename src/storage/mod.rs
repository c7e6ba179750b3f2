//! Ticket storage
//!
//! [`TicketManager`] keeps the tickets of one session in memory and persists
//! them to a CSV file through the codec in [`codec`].

pub mod codec;
mod manager;
mod repository;

pub use manager::{LoadPolicy, LoadReport, NewTicket, NumberRange, TicketManager};
pub use repository::TicketRepository;
