//! Command handlers
//!
//! Each handler loads the data file through a [`HandlerContext`], performs
//! its operation on the store, and renders the result with the
//! [`OutputFormatter`](crate::cli::OutputFormatter).

mod add;
mod common;
mod list;
mod menu;
mod show;

pub use add::{AddParams, handle_add_command};
pub use common::{
    HandlerContext, new_ticket_from_input, parse_date_input, parse_numbers_input,
    parse_product_input,
};
pub use list::handle_list_command;
pub use menu::handle_menu_command;
pub use show::handle_show_command;
