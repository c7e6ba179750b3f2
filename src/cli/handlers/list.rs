//! Handler for the `list` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::error::Result;

/// Handler for the `list` command
///
/// Prints every ticket in file order. A missing data file lists nothing.
pub fn handle_list_command(ctx: &mut HandlerContext, formatter: &OutputFormatter) -> Result<()> {
    ctx.load_tickets(formatter)?;
    formatter.print_tickets(ctx.manager.list())
}
