//! Core data models for the finance tracker

pub mod amount;
pub mod transaction;

pub use amount::{Amount, AmountParseError};
pub use transaction::{Category, Kind, Transaction, TransactionDraft};
