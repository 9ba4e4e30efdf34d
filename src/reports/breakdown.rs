//! Category breakdown
//!
//! Totals per category for one kind of transaction, with each category's share
//! of the whole. This is the data behind the "expenses by category" chart.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Category, Kind};
use crate::storage::Ledger;

/// One category's slice of the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: Category,
    /// Summed amount of the category's transactions
    pub total: Amount,
    /// Number of transactions in the category
    pub transaction_count: usize,
    /// Share of the sum of positive slice totals, 0-100
    pub percentage: f64,
}

/// Totals per category for one kind
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub kind: Kind,
    /// Slices with a non-zero total, in category order
    pub slices: Vec<CategorySlice>,
    /// Sum of all slice totals
    pub total: Amount,
}

impl CategoryBreakdown {
    /// Build the breakdown of the ledger's transactions of `kind`
    pub fn for_kind(ledger: &Ledger, kind: Kind) -> Self {
        let totals = ledger.total_by_category(kind);

        let positive_total: f64 = totals
            .values()
            .filter(|a| a.is_positive())
            .map(|a| a.value())
            .sum();

        let slices: Vec<CategorySlice> = totals
            .iter()
            .filter(|(_, total)| !total.is_zero())
            .map(|(&category, &total)| {
                let transaction_count = ledger
                    .transactions()
                    .iter()
                    .filter(|t| t.kind == kind && t.category == category)
                    .count();
                CategorySlice {
                    category,
                    total,
                    transaction_count,
                    percentage: share(total, positive_total),
                }
            })
            .collect();

        let total: Amount = totals.values().sum();

        tracing::debug!(%kind, slices = slices.len(), total = %total, "built category breakdown");

        Self {
            kind,
            slices,
            total,
        }
    }

    /// Check if there is nothing to chart
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Largest slices first
    pub fn top(&self, limit: usize) -> Vec<&CategorySlice> {
        let mut slices: Vec<_> = self.slices.iter().collect();
        slices.sort_by(|a, b| b.total.value().total_cmp(&a.total.value()));
        slices.into_iter().take(limit).collect()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self) -> String {
        use crate::display::report::{format_bar, format_percentage, separator};

        let mut output = String::new();
        output.push_str(&format!("{} by category\n", self.kind));
        output.push_str(&separator(60));
        output.push('\n');

        if self.slices.is_empty() {
            output.push_str("No transactions.\n");
            return output;
        }

        let max = self
            .slices
            .iter()
            .map(|s| s.total.value())
            .fold(0.0_f64, f64::max);

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<14} {:>12} {:>4} {:>7} {}\n",
                slice.category,
                slice.total,
                slice.transaction_count,
                format_percentage(slice.percentage),
                format_bar(slice.total.value(), max, 20)
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!("{:<14} {:>12}\n", "Total", self.total));
        output
    }
}

/// Export several breakdowns under a single CSV header
pub fn export_breakdowns_csv<W: Write>(
    breakdowns: &[CategoryBreakdown],
    writer: W,
) -> TrackerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Kind", "Category", "Amount", "Transaction Count", "Percentage"])?;

    for breakdown in breakdowns {
        for slice in &breakdown.slices {
            csv.write_record([
                breakdown.kind.label().to_string(),
                slice.category.label().to_string(),
                format!("{:.2}", slice.total.value()),
                slice.transaction_count.to_string(),
                format!("{:.2}", slice.percentage),
            ])?;
        }
    }

    csv.flush()
        .map_err(|e| TrackerError::Io(format!("Failed to write report: {}", e)))
}

/// Percentage of `part` in `whole`; negative parts and empty wholes give 0
pub(crate) fn share(part: Amount, whole: f64) -> f64 {
    if whole <= 0.0 || !part.is_positive() {
        0.0
    } else {
        part.value() / whole * 100.0
    }
}
