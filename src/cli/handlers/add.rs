//! Handler for the `add` command

use super::common::{HandlerContext, new_ticket_from_input};
use crate::cli::OutputFormatter;
use crate::error::{LottoTicketError, Result};

/// Parameters for adding a ticket from the command line
#[derive(Debug, Default)]
pub struct AddParams {
    pub date: Option<String>,
    pub product: Option<String>,
    pub numbers: Option<String>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Handler for the `add` command
///
/// Loads the data file, creates an `Auto` ticket, saves the file again and
/// prints the new ticket. A data file with rows that were skipped on load is
/// left untouched.
///
/// # Errors
///
/// Returns an error if the input is invalid, the data file holds a
/// malformed or skipped row, or the file cannot be written
pub fn handle_add_command(
    params: AddParams,
    ctx: &mut HandlerContext,
    formatter: &OutputFormatter,
) -> Result<()> {
    let request = new_ticket_from_input(
        params.date.as_deref().unwrap_or_default(),
        params.product.as_deref().unwrap_or_default(),
        params.numbers.as_deref().unwrap_or_default(),
        ctx.number_range(params.min, params.max),
    )?;

    let report = ctx.load_tickets(formatter)?;
    if ctx.is_partial_load() {
        return Err(LottoTicketError::PartialLoad {
            path: ctx.data_file.clone(),
            skipped: report.skipped_unsupported + report.malformed,
        });
    }
    let ticket = ctx.manager.create_auto(request)?.clone();
    ctx.save_tickets(formatter)?;

    formatter.success(&format!("Auto Ticket {} added.", ticket.id()));
    formatter.print_ticket(&ticket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::TicketManager;
    use crate::test_utils::TestStore;

    fn context(store: &TestStore) -> HandlerContext {
        HandlerContext::from_config(Config::default(), Some(store.data_file.clone()))
    }

    #[test]
    fn test_add_persists_ticket() {
        let store = TestStore::new();
        let mut ctx = context(&store);

        handle_add_command(
            AddParams {
                date: Some("2024-01-01".to_string()),
                product: Some("X".to_string()),
                numbers: Some("1,2,3,4,5,6".to_string()),
                ..AddParams::default()
            },
            &mut ctx,
            &OutputFormatter::default(),
        )
        .unwrap();

        let mut reloaded = TicketManager::new();
        reloaded.load_from(&store.data_file).unwrap();
        let ticket = reloaded.find_by_id("1").unwrap();
        assert_eq!(ticket.product(), "X");
        assert_eq!(ticket.numbers().joined(), "1, 2, 3, 4, 5, 6");
    }

    #[test]
    fn test_add_appends_to_existing_file() {
        let store = TestStore::with_sample_tickets();
        store.manager.save_to(&store.data_file).unwrap();
        let mut ctx = context(&store);

        handle_add_command(AddParams::default(), &mut ctx, &OutputFormatter::default()).unwrap();

        assert_eq!(ctx.manager.len(), 4);
        assert!(ctx.manager.find_by_id("4").is_some());
    }

    #[test]
    fn test_add_rejects_wrong_number_count() {
        let store = TestStore::new();
        let mut ctx = context(&store);

        let err = handle_add_command(
            AddParams {
                numbers: Some("1,2,3".to_string()),
                ..AddParams::default()
            },
            &mut ctx,
            &OutputFormatter::default(),
        )
        .unwrap_err();

        assert!(matches!(err, LottoTicketError::Validation(_)));
        assert!(!store.data_file.exists());
    }

    #[test]
    fn test_add_rejects_bad_date_before_loading() {
        let store = TestStore::new();
        let mut ctx = context(&store);

        let err = handle_add_command(
            AddParams {
                date: Some("2024/01/01".to_string()),
                ..AddParams::default()
            },
            &mut ctx,
            &OutputFormatter::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LottoTicketError::Validation(_)));
    }

    #[test]
    fn test_add_keeps_file_with_unsupported_rows() {
        let mut store = TestStore::new();
        let content = "Ticket ID,Type,Date,Product,Setnumber\n\
                       1,Auto,2024-01-01,X,\"1, 2, 3, 4, 5, 6\"\n\
                       5,Manual,2024-01-02,Y,\"7, 8, 9, 10, 11, 12\"\n";
        store.write_data(content);
        let mut ctx = context(&store);

        let err = handle_add_command(AddParams::default(), &mut ctx, &OutputFormatter::default())
            .unwrap_err();

        assert!(matches!(err, LottoTicketError::PartialLoad { skipped: 1, .. }));
        assert_eq!(ctx.manager.len(), 1);
        assert_eq!(std::fs::read_to_string(&store.data_file).unwrap(), content);
    }

    #[test]
    fn test_add_keeps_file_with_skipped_malformed_rows() {
        let mut store = TestStore::new();
        let content = "Ticket ID,Type,Date,Product,Setnumber\n\
                       1,Auto,2024-01-01,X,\"1, 2, 3\"\n\
                       2,Auto,2024-01-02,Y,\"1, 2, 3, 4, 5, 6\"\n";
        store.write_data(content);
        let mut config = Config::default();
        config.storage.skip_malformed_rows = true;
        let mut ctx = HandlerContext::from_config(config, Some(store.data_file.clone()));

        let err = handle_add_command(AddParams::default(), &mut ctx, &OutputFormatter::default())
            .unwrap_err();

        assert!(matches!(err, LottoTicketError::PartialLoad { skipped: 1, .. }));
        assert_eq!(std::fs::read_to_string(&store.data_file).unwrap(), content);
    }
}
