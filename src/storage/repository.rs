use super::TicketManager;
use crate::core::Ticket;
use crate::error::{LottoTicketError, Result};

/// Repository trait for ticket lookups used by command handlers
///
/// Unlike [`TicketManager::find_by_id`], `get` turns a miss into
/// [`LottoTicketError::TicketNotFound`] so it can become an exit status.
pub trait TicketRepository {
    /// Loads a ticket by ID
    fn get(&self, id: &str) -> Result<Ticket>;
}

impl TicketRepository for TicketManager {
    fn get(&self, id: &str) -> Result<Ticket> {
        self.find_by_id(id)
            .cloned()
            .ok_or_else(|| LottoTicketError::TicketNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestStore;

    #[test]
    fn test_ticket_repository_get() {
        let store = TestStore::with_sample_tickets();

        let ticket = TicketRepository::get(&store.manager, "1").expect("Failed to get ticket");
        assert_eq!(ticket.id().as_str(), "1");

        let err = TicketRepository::get(&store.manager, "42").unwrap_err();
        assert!(matches!(err, LottoTicketError::TicketNotFound { ref id } if id == "42"));
    }

    #[test]
    fn test_ticket_repository_get_matches_id_text() {
        let store = TestStore::with_sample_tickets();
        assert!(TicketRepository::get(&store.manager, "02").is_err());
        assert_eq!(
            TicketRepository::get(&store.manager, "2").unwrap().product(),
            "Powerball"
        );
    }
}
