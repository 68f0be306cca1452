//! Budget reconciliation
//!
//! Compares budgeted amounts with actual category spending. Entries are
//! expected to be filtered to the active date range before they get here;
//! [`entries_in_range`] is the helper used at that boundary.

use serde::Serialize;
use std::fmt;

use crate::models::{Budget, BudgetId, CashFlowEntry, CategoryId, DateRange, Money};

/// Where a remaining amount stands relative to its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Money left over
    Under,
    /// Spent exactly the budget
    On,
    /// Spent more than budgeted
    Over,
}

impl BudgetStatus {
    /// Arrow shown next to the amount
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Under => "↓",
            Self::On => "=",
            Self::Over => "↑",
        }
    }

    /// Color name used when rendering the status
    pub fn color(&self) -> &'static str {
        match self {
            Self::Under => "green",
            Self::On => "yellow",
            Self::Over => "red",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "Under"),
            Self::On => write!(f, "On"),
            Self::Over => write!(f, "Over"),
        }
    }
}

/// Sum of expense amounts in one category
///
/// Income entries and other categories are ignored. A category with no
/// matching entries has spent zero.
pub fn amount_spent_in_category(expenses: &[CashFlowEntry], category_id: CategoryId) -> Money {
    expenses
        .iter()
        .filter(|e| e.is_expense() && e.category_id == category_id)
        .map(|e| e.amount)
        .sum()
}

/// Budget amount minus what was spent in its category; negative when over
pub fn remaining_budget(budget: &Budget, expenses: &[CashFlowEntry]) -> Money {
    budget.amount - amount_spent_in_category(expenses, budget.category_id)
}

/// Classify a remaining amount. Exact on zero since amounts are whole cents.
pub fn budget_status(remaining: Money) -> BudgetStatus {
    if remaining.is_zero() {
        BudgetStatus::On
    } else if remaining.is_positive() {
        BudgetStatus::Under
    } else {
        BudgetStatus::Over
    }
}

/// Entries dated inside a range
pub fn entries_in_range(entries: &[CashFlowEntry], range: &DateRange) -> Vec<CashFlowEntry> {
    entries
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect()
}

/// Reconciliation of one budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetRow {
    pub budget_id: BudgetId,
    pub category_id: CategoryId,
    pub name: String,
    pub budgeted: Money,
    pub spent: Money,
    pub remaining: Money,
    pub status: BudgetStatus,
}

impl BudgetRow {
    /// Reconcile a single budget against the entries
    pub fn from_budget(budget: &Budget, expenses: &[CashFlowEntry]) -> Self {
        let spent = amount_spent_in_category(expenses, budget.category_id);
        let remaining = budget.amount - spent;
        Self {
            budget_id: budget.id,
            category_id: budget.category_id,
            name: budget.display_name(),
            budgeted: budget.amount,
            spent,
            remaining,
            status: budget_status(remaining),
        }
    }
}

/// Per-budget rows plus portfolio totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetOverview {
    pub rows: Vec<BudgetRow>,
    /// Sum of all budget amounts
    pub total_budgeted: Money,
    /// Sum of every expense, including categories with no budget
    pub total_spent: Money,
    /// `total_budgeted - total_spent`
    pub over_under: Money,
    pub status: BudgetStatus,
}

impl BudgetOverview {
    /// Reconcile all budgets against the expenses of the active range
    pub fn generate(budgets: &[Budget], expenses: &[CashFlowEntry]) -> Self {
        let rows: Vec<BudgetRow> = budgets
            .iter()
            .map(|b| BudgetRow::from_budget(b, expenses))
            .collect();

        let total_budgeted: Money = budgets.iter().map(|b| b.amount).sum();
        let total_spent: Money = expenses
            .iter()
            .filter(|e| e.is_expense())
            .map(|e| e.amount)
            .sum();
        let over_under = total_budgeted - total_spent;

        Self {
            rows,
            total_budgeted,
            total_spent,
            over_under,
            status: budget_status(over_under),
        }
    }

    /// Rows that are over budget
    pub fn overspent(&self) -> impl Iterator<Item = &BudgetRow> {
        self.rows.iter().filter(|r| r.status == BudgetStatus::Over)
    }

    /// The signed total shown on the dashboard (`+10.00`, `-15.00`, `+0.00`)
    pub fn over_under_display(&self) -> String {
        self.over_under.format_signed()
    }
}
