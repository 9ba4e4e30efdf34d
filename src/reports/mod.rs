//! Reports module for the finance tracker
//!
//! Derived views of the ledger used by the charts and the `report` command:
//! category breakdowns and the income/expense split.

pub mod breakdown;
pub mod income_expense;

pub use breakdown::{export_breakdowns_csv, CategoryBreakdown, CategorySlice};
pub use income_expense::{DailyTotals, IncomeExpenseSplit};
