//! Command handlers for the memrank CLI

pub mod check;
pub mod rank;

pub use check::handle_check_command;
pub use rank::handle_rank_command;
