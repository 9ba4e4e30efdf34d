//! CLI commands for balance and reports

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Kind;
use crate::reports::{export_breakdowns_csv, CategoryBreakdown, IncomeExpenseSplit};
use crate::storage::Ledger;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Only break down this kind (both when omitted)
    #[arg(short, long, value_enum)]
    pub kind: Option<Kind>,

    /// Export the category breakdown to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show top N categories only
    #[arg(long)]
    pub top: Option<usize>,
}

/// Handle `balance`
pub fn handle_balance_command(ledger: &Ledger, settings: &Settings) -> TrackerResult<()> {
    println!(
        "Balance: {}",
        ledger.balance().format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `report`
pub fn handle_report_command(ledger: &Ledger, args: ReportArgs) -> TrackerResult<()> {
    let kinds: Vec<Kind> = match args.kind {
        Some(kind) => vec![kind],
        None => Kind::ALL.to_vec(),
    };
    let breakdowns: Vec<CategoryBreakdown> = kinds
        .into_iter()
        .map(|kind| CategoryBreakdown::for_kind(ledger, kind))
        .collect();

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            TrackerError::Io(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export_breakdowns_csv(&breakdowns, &mut writer)?;
        println!("Report exported to: {}", path.display());
        return Ok(());
    }

    for breakdown in &breakdowns {
        if let Some(n) = args.top {
            println!("Top {} {} categories\n", n, breakdown.kind);
            println!("{:<14} {:>12} {:>8}", "Category", "Amount", "%");
            println!("{}", "-".repeat(36));
            for slice in breakdown.top(n) {
                println!(
                    "{:<14} {:>12} {:>7.1}%",
                    slice.category, slice.total, slice.percentage
                );
            }
            println!();
        } else {
            println!("{}", breakdown.format_terminal());
        }
    }

    println!("{}", IncomeExpenseSplit::from_ledger(ledger).format_terminal());
    Ok(())
}
