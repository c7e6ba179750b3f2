//! Handler for the `show` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::storage::TicketRepository;

/// Handler for the `show` command
///
/// # Errors
///
/// Returns `TicketNotFound` when no ticket has the given id
pub fn handle_show_command(
    id: &str,
    ctx: &mut HandlerContext,
    formatter: &OutputFormatter,
) -> Result<()> {
    ctx.load_tickets(formatter)?;
    let ticket = ctx.manager.get(id.trim())?;
    formatter.print_ticket(&ticket)
}
