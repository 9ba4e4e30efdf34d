//! CLI commands for recording and listing transactions

use clap::Args;

use crate::config::Settings;
use crate::display::format_transaction_register;
use crate::error::TrackerResult;
use crate::models::{Category, Kind, TransactionDraft};
use crate::storage::Ledger;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, e.g. "1500" or "12.50"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Income or expense
    #[arg(short, long, value_enum)]
    pub kind: Kind,

    /// Category of the transaction
    #[arg(short, long, value_enum)]
    pub category: Category,

    /// Transaction date (defaults to today, YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show only the most recent N transactions
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `add`: validate, append, report the new balance
pub fn handle_add_command(
    ledger: &mut Ledger,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    let draft = TransactionDraft::new(date, args.amount, args.kind, args.category)
        .with_description(args.description.unwrap_or_default());

    let txn = ledger.append(&draft)?;
    println!("Recorded: {}", txn);
    println!(
        "Balance: {}",
        ledger.balance().format_with_symbol(&settings.currency_symbol)
    );

    Ok(())
}

/// Handle `list`: print the register in insertion order
pub fn handle_list_command(ledger: &Ledger, args: ListArgs) -> TrackerResult<()> {
    let transactions = ledger.transactions();
    let offset = match args.limit {
        Some(limit) => transactions.len().saturating_sub(limit),
        None => 0,
    };

    print!(
        "{}",
        format_transaction_register(&transactions[offset..], offset)
    );
    Ok(())
}
