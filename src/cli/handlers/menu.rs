//! Handler for the interactive menu
//!
//! Loads the data file, lists what is there, then loops over the five menu
//! actions until the user exits. Errors the user can fix are printed and the
//! loop goes on.

use super::common::{HandlerContext, new_ticket_from_input};
use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::interactive::{InteractiveMode, MenuChoice, TicketInput};
use crate::storage::NewTicket;

/// Handler for the `menu` command
///
/// # Errors
///
/// Returns an error only when the terminal itself fails or an unrecoverable
/// error occurs; the menu does not save on exit.
pub fn handle_menu_command(ctx: &mut HandlerContext, formatter: &OutputFormatter) -> Result<()> {
    let mode = InteractiveMode::new();

    if let Err(e) = ctx.load_tickets(formatter) {
        formatter.error(&e.user_message());
    }
    println!();
    formatter.print_tickets(ctx.manager.list())?;

    loop {
        let Some(choice) = mode.select_action()? else {
            println!("Invalid choice, please try again.");
            continue;
        };
        if choice == MenuChoice::Exit {
            println!("Exiting...");
            return Ok(());
        }

        if let Err(e) = run_action(choice, &mode, ctx, formatter) {
            if !e.is_recoverable() {
                return Err(e);
            }
            formatter.error(&e.user_message());
        }
    }
}

fn run_action(
    choice: MenuChoice,
    mode: &InteractiveMode,
    ctx: &mut HandlerContext,
    formatter: &OutputFormatter,
) -> Result<()> {
    match choice {
        MenuChoice::AddTicket => {
            let input = mode.ticket_input(ctx.number_range(None, None))?;
            let request = ticket_request(input, ctx)?;
            ctx.manager.create_auto(request)?;
            println!("Auto Ticket added.");
            Ok(())
        },
        MenuChoice::ListTickets => formatter.print_tickets(ctx.manager.list()),
        MenuChoice::SaveTickets => ctx.save_tickets(formatter),
        MenuChoice::SearchTicket => {
            let id = mode.ticket_id()?;
            match ctx.manager.find_by_id(&id) {
                Some(ticket) => formatter.print_ticket(ticket),
                None => {
                    println!("Ticket not found.");
                    Ok(())
                },
            }
        },
        MenuChoice::Exit => Ok(()),
    }
}

/// Turn prompt answers into a ticket request
fn ticket_request(input: TicketInput, ctx: &HandlerContext) -> Result<NewTicket> {
    let range = input
        .range
        .unwrap_or_else(|| ctx.number_range(None, None));
    new_ticket_from_input(&input.date, &input.product, &input.numbers, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::LottoTicketError;
    use crate::storage::NumberRange;
    use crate::test_utils::TestStore;

    fn context(store: &TestStore) -> HandlerContext {
        HandlerContext::from_config(Config::default(), Some(store.data_file.clone()))
    }

    #[test]
    fn test_ticket_request_with_numbers() {
        let store = TestStore::new();
        let ctx = context(&store);
        let request = ticket_request(
            TicketInput {
                date: "2024-01-01".to_string(),
                product: "X".to_string(),
                numbers: "1, 2, 3, 4, 5, 6".to_string(),
                range: None,
            },
            &ctx,
        )
        .unwrap();

        assert_eq!(request.numbers.unwrap().len(), 6);
        assert_eq!(request.range, NumberRange::default());
    }

    #[test]
    fn test_ticket_request_uses_prompted_range() {
        let store = TestStore::new();
        let mut ctx = context(&store);
        let request = ticket_request(
            TicketInput {
                range: Some(NumberRange { min: 10, max: 12 }),
                ..TicketInput::default()
            },
            &ctx,
        )
        .unwrap();

        let ticket = ctx.manager.create_auto(request).unwrap();
        assert_eq!(ticket.product(), "Unknown");
        for n in ticket.numbers().as_slice() {
            let value: i64 = n.parse().unwrap();
            assert!((10..=12).contains(&value));
        }
    }

    #[test]
    fn test_ticket_request_rejects_bad_date() {
        let store = TestStore::new();
        let ctx = context(&store);
        let err = ticket_request(
            TicketInput {
                date: "31-12-2024".to_string(),
                ..TicketInput::default()
            },
            &ctx,
        )
        .unwrap_err();
        assert!(matches!(err, LottoTicketError::Validation(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_save_after_aborted_load_keeps_loaded_rows() {
        let mut store = TestStore::new();
        store.write_data(
            "Ticket ID,Type,Date,Product,Setnumber\n\
             1,Auto,2024-01-01,X,\"1, 2, 3, 4, 5, 6\"\n\
             2,Auto,2024-01-02,Y,\"1, 2\"\n\
             3,Auto,2024-01-03,Z,\"1, 2, 3, 4, 5, 6\"\n",
        );
        let mut ctx = context(&store);
        let formatter = OutputFormatter::default();

        assert!(ctx.load_tickets(&formatter).is_err());
        assert!(ctx.is_partial_load());

        run_action(MenuChoice::SaveTickets, &InteractiveMode::new(), &mut ctx, &formatter)
            .unwrap();
        assert!(!ctx.is_partial_load());

        let saved = std::fs::read_to_string(&store.data_file).unwrap();
        assert_eq!(saved.lines().count(), 2);
        assert!(saved.contains("1,Auto,2024-01-01,X"));
    }
}
