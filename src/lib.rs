//! Finance Tracker - terminal personal finance ledger
//!
//! This library provides the core functionality for the finance tracker: a
//! ledger of income and expense records persisted to a CSV file, totals and
//! chart data derived from it, and the CLI and TUI front ends.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, kinds, categories, transactions)
//! - `storage`: CSV file storage and the in-memory ledger
//! - `reports`: Category breakdowns and the income/expense split
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{TrackerPaths, Settings};
//! use finance_tracker::storage::Ledger;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::load(settings.ledger_path(&paths, None));
//! println!("Balance: {}", ledger.balance());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
