//! The transaction ledger
//!
//! An insertion-ordered list of transactions held in memory and mirrored to a
//! CSV file. Every append rewrites the whole file from the in-memory list.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::TrackerResult;
use crate::models::{Amount, Category, Kind, Transaction, TransactionDraft};

use super::file_io::{read_csv, write_csv_atomic, CsvContents};

/// Header row of the ledger file
pub const HEADER: [&str; 5] = ["Date", "Amount", "Kind", "Category", "Description"];

/// Columns a ledger file must have, with the spellings older files used
const REQUIRED_COLUMNS: &[&[&str]] = &[
    &["Date", "Дата"],
    &["Amount", "Сумма"],
    &["Kind", "Тип"],
    &["Category", "Категория"],
];

/// Append-only transaction ledger backed by a CSV file
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Load the ledger stored at `path`
    ///
    /// A missing file starts an empty ledger and creates the file with just
    /// the header. An empty or unreadable file also starts an empty ledger.
    /// Loading never fails.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let transactions = match read_csv::<Transaction, _>(&path, REQUIRED_COLUMNS) {
            Ok(CsvContents::Rows { rows, skipped }) => {
                tracing::info!(
                    file = %path.display(),
                    records = rows.len(),
                    skipped,
                    "loaded ledger"
                );
                rows
            }
            Ok(CsvContents::Empty) => {
                tracing::info!(file = %path.display(), "ledger file is empty, starting fresh");
                Vec::new()
            }
            Ok(CsvContents::Missing) => {
                tracing::info!(file = %path.display(), "ledger file not found, creating it");
                if let Err(e) = write_csv_atomic::<Transaction, _, _>(&path, &HEADER, &[]) {
                    tracing::warn!(file = %path.display(), error = %e, "could not create ledger file");
                }
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    file = %path.display(),
                    error = %e,
                    "ledger file unreadable, starting with an empty ledger"
                );
                Vec::new()
            }
        };

        Self { path, transactions }
    }

    /// Validate a draft and append it
    ///
    /// The file is rewritten before the record is committed in memory, so on
    /// any error both are left unchanged.
    pub fn append(&mut self, draft: &TransactionDraft) -> TrackerResult<&Transaction> {
        let txn = draft.validate().inspect_err(|e| {
            tracing::debug!(amount = %draft.amount, error = %e, "rejected draft");
        })?;

        write_csv_atomic(
            &self.path,
            &HEADER,
            self.transactions.iter().chain(std::iter::once(&txn)),
        )?;

        tracing::info!(
            kind = %txn.kind,
            category = %txn.category,
            amount = txn.amount.value(),
            "appended transaction"
        );

        self.transactions.push(txn);
        let last = self.transactions.len() - 1;
        Ok(&self.transactions[last])
    }

    /// Sum of amounts of all transactions of the given kind
    pub fn total_by_type(&self, kind: Kind) -> Amount {
        self.of_kind(kind).map(|t| t.amount).sum()
    }

    /// Summed amounts per category, restricted to the given kind
    ///
    /// Only categories with at least one transaction appear.
    pub fn total_by_category(&self, kind: Kind) -> BTreeMap<Category, Amount> {
        let mut totals = BTreeMap::new();
        for txn in self.of_kind(kind) {
            *totals.entry(txn.category).or_insert(Amount::ZERO) += txn.amount;
        }
        totals
    }

    /// Total income minus total expense
    pub fn balance(&self) -> Amount {
        self.total_by_type(Kind::Income) - self.total_by_type(Kind::Expense)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger has no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn of_kind(&self, kind: Kind) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| t.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ledger_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("finances.csv")
    }

    fn draft(date: &str, amount: &str, kind: Kind, category: Category) -> TransactionDraft {
        TransactionDraft::new(date, amount, kind, category)
    }

    #[test]
    fn test_load_missing_file_creates_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);

        let ledger = Ledger::load(&path);

        assert!(ledger.is_empty());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Date,Amount,Kind,Category,Description\n"
        );
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        fs::write(&path, "").unwrap();

        let ledger = Ledger::load(&path);

        assert!(ledger.is_empty());
        assert_eq!(ledger.balance(), Amount::ZERO);
    }

    #[test]
    fn test_load_garbage_file_is_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        fs::write(&path, "\u{1}\u{2} not a ledger\nat all\n").unwrap();

        let ledger = Ledger::load(&path);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_scenario_salary_and_food() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::load(ledger_path(&temp_dir));

        ledger
            .append(&draft("2024-01-01", "1000", Kind::Income, Category::Salary))
            .unwrap();
        ledger
            .append(&draft("2024-01-02", "200", Kind::Expense, Category::Food))
            .unwrap();

        assert_eq!(ledger.balance().value(), 800.0);

        let expenses = ledger.total_by_category(Kind::Expense);
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[&Category::Food].value(), 200.0);
    }

    #[test]
    fn test_balance_matches_recomputed_totals() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::load(ledger_path(&temp_dir));

        let inputs = [
            ("10.25", Kind::Income, Category::Investments),
            ("3.5", Kind::Expense, Category::Food),
            ("-7", Kind::Expense, Category::Clothing),
            ("1e2", Kind::Income, Category::Salary),
            ("0.1", Kind::Expense, Category::Transport),
            ("0.2", Kind::Expense, Category::Transport),
        ];

        for (amount, kind, category) in inputs {
            ledger.append(&draft("d", amount, kind, category)).unwrap();

            let income: f64 = ledger
                .transactions()
                .iter()
                .filter(|t| t.kind == Kind::Income)
                .map(|t| t.amount.value())
                .sum();
            let expense: f64 = ledger
                .transactions()
                .iter()
                .filter(|t| t.kind == Kind::Expense)
                .map(|t| t.amount.value())
                .sum();

            assert_eq!(ledger.balance().value(), income - expense);
        }

        let transport = ledger.total_by_category(Kind::Expense)[&Category::Transport];
        assert_eq!(transport.value(), 0.1 + 0.2);
    }

    #[test]
    fn test_invalid_amount_leaves_ledger_and_file_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        let mut ledger = Ledger::load(&path);
        ledger
            .append(&draft("2024-01-01", "50", Kind::Income, Category::Other))
            .unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = ledger
            .append(&draft("2024-01-02", "fifty", Kind::Expense, Category::Food))
            .unwrap_err();

        assert!(err.is_invalid_input());
        assert_eq!(ledger.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_round_trip_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        let mut ledger = Ledger::load(&path);

        ledger
            .append(
                &draft("2024-01-01", "1000.5", Kind::Income, Category::Salary)
                    .with_description("pay, january"),
            )
            .unwrap();
        ledger
            .append(&draft("next tuesday", "-3", Kind::Expense, Category::Entertainment))
            .unwrap();
        ledger
            .append(
                &draft("2024-01-03", "0.1", Kind::Expense, Category::Food)
                    .with_description("\"quoted\" snack"),
            )
            .unwrap();

        let reloaded = Ledger::load(&path);
        assert_eq!(reloaded.transactions(), ledger.transactions());
    }

    #[test]
    fn test_append_rewrites_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        let mut ledger = Ledger::load(&path);

        ledger
            .append(&draft("2024-01-01", "1000", Kind::Income, Category::Salary))
            .unwrap();
        ledger
            .append(&draft("2024-01-02", "200", Kind::Expense, Category::Food).with_description("lunch"))
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[0], "Date,Amount,Kind,Category,Description");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2024-01-01,1000"));
        assert!(lines[1].ends_with(",Income,Salary,"));
        assert!(lines[2].ends_with(",Expense,Food,lunch"));
    }

    #[test]
    fn test_load_reads_legacy_russian_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        fs::write(
            &path,
            "Дата,Сумма,Тип,Категория,Описание\n\
             2024-01-01,1000.0,Доход,Зарплата,\n\
             2024-01-02,200.0,Расход,Еда,обед\n",
        )
        .unwrap();

        let ledger = Ledger::load(&path);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions()[1].category, Category::Food);
        assert_eq!(ledger.transactions()[1].description.as_deref(), Some("обед"));
        assert_eq!(ledger.balance().value(), 800.0);
    }

    #[test]
    fn test_badly_encoded_row_does_not_lose_the_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        let mut bytes = b"Date,Amount,Kind,Category,Description\n\
            2024-01-01,1000.0,Income,Salary,\n"
            .to_vec();
        bytes.extend_from_slice(b"2024-01-02,5.0,Expense,Food,caf\xe9\n");
        bytes.extend_from_slice(b"2024-01-03,200.0,Expense,Food,\n");
        fs::write(&path, bytes).unwrap();

        let mut ledger = Ledger::load(&path);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.balance().value(), 800.0);

        ledger
            .append(&draft("2024-01-04", "1", Kind::Income, Category::Other))
            .unwrap();

        let reloaded = Ledger::load(&path);
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.transactions()[0].date, "2024-01-01");
        assert_eq!(reloaded.transactions()[1].date, "2024-01-03");
    }

    #[test]
    fn test_load_skips_undecodable_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        fs::write(
            &path,
            "Date,Amount,Kind,Category,Description\n\
             2024-01-01,10,Income,Salary,\n\
             2024-01-02,ten,Expense,Food,\n\
             2024-01-03,5,Expense,Rent,\n\
             2024-01-04,2,Expense,Food\n",
        )
        .unwrap();

        let ledger = Ledger::load(&path);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.balance().value(), 8.0);
    }

    #[test]
    fn test_append_failure_keeps_memory_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = ledger_path(&temp_dir);
        fs::create_dir(&path).unwrap();
        let mut ledger = Ledger::load(&path);

        let result = ledger.append(&draft("2024-01-01", "1", Kind::Income, Category::Other));

        assert!(result.is_err());
        assert!(ledger.is_empty());
    }
}
