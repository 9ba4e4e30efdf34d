//! Transaction model
//!
//! A transaction is one ledger row: a free-text date, a signed amount, whether
//! it is income or an expense, a category and an optional description.
//!
//! Field and variant names double as the ledger file's header and cell values.
//! The Russian labels written by older versions of the tracker are accepted as
//! aliases when reading.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use crate::error::{TrackerError, TrackerResult};

/// Whether a transaction brings money in or takes it out
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Kind {
    #[serde(alias = "Доход")]
    Income,
    #[serde(alias = "Расход")]
    Expense,
}

impl Kind {
    /// All kinds in display order
    pub const ALL: [Kind; 2] = [Kind::Income, Kind::Expense];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of tags describing what a transaction was for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Category {
    #[serde(alias = "Еда")]
    Food,
    #[serde(alias = "Транспорт")]
    Transport,
    #[serde(alias = "Развлечения")]
    Entertainment,
    #[serde(alias = "Одежда")]
    Clothing,
    #[serde(alias = "Зарплата")]
    Salary,
    #[serde(alias = "Инвестиции")]
    Investments,
    #[serde(alias = "Другое")]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Clothing,
        Category::Salary,
        Category::Investments,
        Category::Other,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Clothing => "Clothing",
            Self::Salary => "Salary",
            Self::Investments => "Investments",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date as entered; never parsed
    #[serde(rename = "Date", alias = "Дата")]
    pub date: String,

    /// Signed amount as entered
    #[serde(rename = "Amount", alias = "Сумма")]
    pub amount: Amount,

    #[serde(rename = "Kind", alias = "Тип")]
    pub kind: Kind,

    #[serde(rename = "Category", alias = "Категория")]
    pub category: Category,

    #[serde(rename = "Description", alias = "Описание", default)]
    pub description: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// A blank description is stored as no description.
    pub fn new(
        date: impl Into<String>,
        amount: Amount,
        kind: Kind,
        category: Category,
        description: Option<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            kind,
            category,
            description: description.filter(|d| !d.trim().is_empty()),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }

    /// Description or an empty string
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.kind, self.amount, self.category
        )?;
        if let Some(description) = &self.description {
            write!(f, " - {}", description)?;
        }
        Ok(())
    }
}

/// A transaction as submitted by a form, before the amount is validated
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: String,
    pub amount: String,
    pub kind: Kind,
    pub category: Category,
    pub description: String,
}

impl TransactionDraft {
    /// Create a draft with no description
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        kind: Kind,
        category: Category,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            kind,
            category,
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Turn the draft into a transaction
    ///
    /// Fails with `InvalidInput` when the amount is not a number.
    pub fn validate(&self) -> TrackerResult<Transaction> {
        let amount =
            Amount::parse(&self.amount).map_err(|_| TrackerError::invalid_amount(&self.amount))?;

        Ok(Transaction::new(
            self.date.clone(),
            amount,
            self.kind,
            self.category,
            Some(self.description.clone()),
        ))
    }
}
