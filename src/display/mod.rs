//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for the command line.

pub mod report;
pub mod transaction;

pub use report::{format_bar, format_percentage, separator, truncate};
pub use transaction::format_transaction_register;
