//! Storage layer for the finance tracker
//!
//! The ledger lives in a single CSV file that is rewritten atomically on every
//! change.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_csv, write_csv_atomic, CsvContents};
pub use ledger::{Ledger, HEADER};
