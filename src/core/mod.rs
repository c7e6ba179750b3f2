//! Core ticket types
//!
//! A [`Ticket`] is an immutable value: id, date, variant payload and six
//! numbers. Construction goes through [`Ticket::auto`], [`TicketBuilder`] or
//! [`Ticket::deserialize`], all of which enforce the six-number rule.

mod builders;
mod ticket;

pub use builders::{DEFAULT_PRODUCT, TicketBuilder};
pub use ticket::{
    DATE_FORMAT, KindTag, NUMBER_COUNT, NUMBER_SEPARATOR, Numbers, Ticket, TicketId, TicketKind,
    parse_date,
};
