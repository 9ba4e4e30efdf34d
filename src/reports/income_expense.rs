//! Income versus expenses
//!
//! The overall split between money in and money out, plus the same split per
//! date string.

use crate::models::{Amount, Kind};
use crate::storage::Ledger;

use super::breakdown::share;

/// Overall income and expense totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeExpenseSplit {
    pub income: Amount,
    pub expense: Amount,
    pub balance: Amount,
    /// Income's share of income + expense, 0-100
    pub income_percentage: f64,
    /// Expense's share of income + expense, 0-100
    pub expense_percentage: f64,
}

impl IncomeExpenseSplit {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let income = ledger.total_by_type(Kind::Income);
        let expense = ledger.total_by_type(Kind::Expense);

        let whole: f64 = [income, expense]
            .iter()
            .filter(|a| a.is_positive())
            .map(|a| a.value())
            .sum();

        Self {
            income,
            expense,
            balance: ledger.balance(),
            income_percentage: share(income, whole),
            expense_percentage: share(expense, whole),
        }
    }

    /// Format the split for terminal display
    pub fn format_terminal(&self) -> String {
        use crate::display::report::{format_bar, format_percentage, separator};

        let max = self.income.value().max(self.expense.value());
        let mut output = String::new();
        output.push_str("Income vs expenses\n");
        output.push_str(&separator(60));
        output.push('\n');
        for (label, amount, pct) in [
            ("Income", self.income, self.income_percentage),
            ("Expenses", self.expense, self.expense_percentage),
        ] {
            output.push_str(&format!(
                "{:<14} {:>12} {:>7} {}\n",
                label,
                amount,
                format_percentage(pct),
                format_bar(amount.value(), max, 20)
            ));
        }
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!("{:<14} {:>12}\n", "Balance", self.balance));
        output
    }
}

/// Income and expense recorded under one date string
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotals {
    pub date: String,
    pub income: Amount,
    pub expense: Amount,
}

impl DailyTotals {
    /// Totals per date, in order of each date's first appearance
    ///
    /// Dates are free text, so identical strings are grouped and insertion
    /// order stands in for chronology.
    pub fn from_ledger(ledger: &Ledger) -> Vec<Self> {
        let mut days: Vec<DailyTotals> = Vec::new();

        for txn in ledger.transactions() {
            let index = match days.iter().position(|d| d.date == txn.date) {
                Some(index) => index,
                None => {
                    days.push(DailyTotals {
                        date: txn.date.clone(),
                        income: Amount::ZERO,
                        expense: Amount::ZERO,
                    });
                    days.len() - 1
                }
            };

            match txn.kind {
                Kind::Income => days[index].income += txn.amount,
                Kind::Expense => days[index].expense += txn.amount,
            }
        }

        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionDraft};
    use tempfile::TempDir;

    fn ledger_with(entries: &[(&str, &str, Kind)]) -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::load(temp_dir.path().join("finances.csv"));
        for (date, amount, kind) in entries {
            ledger
                .append(&TransactionDraft::new(*date, *amount, *kind, Category::Other))
                .unwrap();
        }
        (temp_dir, ledger)
    }

    #[test]
    fn test_split_shares() {
        let (_temp_dir, ledger) = ledger_with(&[
            ("2024-01-01", "750", Kind::Income),
            ("2024-01-02", "250", Kind::Expense),
        ]);

        let split = IncomeExpenseSplit::from_ledger(&ledger);

        assert_eq!(split.income.value(), 750.0);
        assert_eq!(split.expense.value(), 250.0);
        assert_eq!(split.balance.value(), 500.0);
        assert_eq!(split.income_percentage, 75.0);
        assert_eq!(split.expense_percentage, 25.0);
        assert!(split.format_terminal().contains("Balance"));
    }

    #[test]
    fn test_empty_split_has_zero_shares() {
        let (_temp_dir, ledger) = ledger_with(&[]);

        let split = IncomeExpenseSplit::from_ledger(&ledger);

        assert_eq!(split.income_percentage, 0.0);
        assert_eq!(split.expense_percentage, 0.0);
        assert!(!split.income_percentage.is_nan());
    }

    #[test]
    fn test_daily_totals_group_by_date_string() {
        let (_temp_dir, ledger) = ledger_with(&[
            ("2024-01-02", "100", Kind::Income),
            ("2024-01-01", "40", Kind::Expense),
            ("2024-01-02", "10", Kind::Expense),
            ("2024-01-02", "5", Kind::Income),
        ]);

        let days = DailyTotals::from_ledger(&ledger);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2024-01-02");
        assert_eq!(days[0].income.value(), 105.0);
        assert_eq!(days[0].expense.value(), 10.0);
        assert_eq!(days[1].date, "2024-01-01");
        assert_eq!(days[1].income, Amount::ZERO);
        assert_eq!(days[1].expense.value(), 40.0);
    }
}
