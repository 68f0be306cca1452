//! Cash flow entry model
//!
//! Income and expense records. Amounts are always stored as positive cents;
//! the entry type carries the direction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, EntryId};
use super::money::Money;

/// Direction of a cash flow entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    #[serde(default)]
    pub id: EntryId,

    pub amount: Money,

    pub category_id: CategoryId,

    pub entry_type: EntryType,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CashFlowEntry {
    /// Create a new entry
    pub fn new(
        category_id: CategoryId,
        entry_type: EntryType,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: EntryId::new(),
            amount,
            category_id,
            entry_type,
            date,
            description: None,
        }
    }

    /// Create an expense entry
    pub fn expense(category_id: CategoryId, amount: Money, date: NaiveDate) -> Self {
        Self::new(category_id, EntryType::Expense, amount, date)
    }

    /// Create an income entry
    pub fn income(category_id: CategoryId, amount: Money, date: NaiveDate) -> Self {
        Self::new(category_id, EntryType::Income, amount, date)
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_expense(&self) -> bool {
        self.entry_type == EntryType::Expense
    }
}

impl fmt::Display for CashFlowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.entry_type,
            self.amount
        )?;
        if let Some(description) = &self.description {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}
