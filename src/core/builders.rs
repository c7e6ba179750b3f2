use super::{Numbers, Ticket, TicketId};
use crate::error::{LottoTicketError, Result};
use chrono::{Local, NaiveDate};

/// Label used when an `Auto` ticket is created without a product
pub const DEFAULT_PRODUCT: &str = "Unknown";

/// Builder for creating `Auto` Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    date: Option<NaiveDate>,
    product: Option<String>,
    numbers: Option<Vec<String>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the ticket date
    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the product label
    #[must_use]
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Set the six numbers
    #[must_use]
    pub fn numbers<I, S>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numbers = Some(numbers.into_iter().map(Into::into).collect());
        self
    }

    /// Build the ticket
    ///
    /// The date defaults to today and the product to `"Unknown"`. The id and
    /// numbers have no default.
    pub fn build(self) -> Result<Ticket> {
        let id = self
            .id
            .ok_or_else(|| LottoTicketError::validation("ticket id is required"))?;
        let numbers = self
            .numbers
            .ok_or_else(|| LottoTicketError::validation("setnumber is required"))?;

        Ok(Ticket::auto(
            id,
            self.date.unwrap_or_else(|| Local::now().date_naive()),
            self.product.unwrap_or_else(|| DEFAULT_PRODUCT.to_string()),
            Numbers::new(numbers)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let ticket = TicketBuilder::new()
            .id(TicketId::from_value(3))
            .date(NaiveDate::from_ymd_opt(2024, 5, 17).unwrap())
            .product("Powerball")
            .numbers(["5", "11", "19", "23", "38", "42"])
            .build()
            .unwrap();

        assert_eq!(ticket.id().as_str(), "3");
        assert_eq!(ticket.product(), "Powerball");
        assert_eq!(ticket.numbers().as_slice()[2], "19");
    }

    #[test]
    fn test_ticket_builder_defaults() {
        let ticket = TicketBuilder::new()
            .id(TicketId::from_value(1))
            .numbers(["1", "2", "3", "4", "5", "6"])
            .build()
            .unwrap();

        assert_eq!(ticket.product(), DEFAULT_PRODUCT);
        assert_eq!(ticket.date(), Local::now().date_naive());
    }

    #[test]
    fn test_ticket_builder_requires_id_and_numbers() {
        assert!(TicketBuilder::new().numbers(["1"; 6]).build().is_err());
        assert!(TicketBuilder::new().id(TicketId::from_value(1)).build().is_err());
        assert!(
            TicketBuilder::new()
                .id(TicketId::from_value(1))
                .numbers(["1"; 5])
                .build()
                .is_err()
        );
    }
}
