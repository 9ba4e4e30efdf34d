//! Transaction display formatting
//!
//! Renders the ledger as a table for the `list` command.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Transaction;

use super::report::truncate;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a register table
///
/// `offset` is the position of the first transaction in the ledger, so row
/// numbers stay stable when only the tail is shown.
pub fn format_transaction_register(transactions: &[Transaction], offset: usize) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().enumerate().map(|(i, txn)| RegisterRow {
        index: offset + i + 1,
        date: txn.date.clone(),
        kind: txn.kind.to_string(),
        category: txn.category.to_string(),
        amount: txn.amount.to_string(),
        description: truncate(txn.description_or_empty(), 40),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
