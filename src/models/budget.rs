//! Budget model
//!
//! A spending limit for one category, optionally bounded by dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::money::Money;

/// A budgeted amount for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    #[serde(default)]
    pub id: BudgetId,

    /// Amount budgeted, in cents
    pub amount: Money,

    /// The category this budget limits
    pub category_id: CategoryId,

    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Budget {
    /// Create a new budget for a category
    pub fn new(category_id: CategoryId, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            amount,
            category_id,
            name: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the active date bounds
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Name for display, falling back to the category id
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.category_id.short())
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }

        if !self.amount.is_within_limit() {
            return Err(BudgetValidationError::AmountTooLarge);
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(BudgetValidationError::EndBeforeStart);
            }
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budgeted: {}", self.display_name(), self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget,
    AmountTooLarge,
    EndBeforeStart,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
            Self::AmountTooLarge => write!(
                f,
                "Budget amount cannot exceed {}",
                Money::from_cents(Money::MAX_ABS_CENTS)
            ),
            Self::EndBeforeStart => write!(f, "Budget end date cannot be before its start date"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let category_id = CategoryId::new();
        let budget = Budget::new(category_id, Money::from_cents(50000)).with_name("Groceries");

        assert_eq!(budget.category_id, category_id);
        assert_eq!(budget.amount.cents(), 50000);
        assert_eq!(budget.display_name(), "Groceries");
        assert_eq!(budget.to_string(), "Groceries budgeted: $500.00");
    }

    #[test]
    fn test_display_name_falls_back_to_category() {
        let category_id = CategoryId::new();
        let budget = Budget::new(category_id, Money::zero());
        assert_eq!(budget.display_name(), category_id.short());
    }

    #[test]
    fn test_validation() {
        let mut budget = Budget::new(CategoryId::new(), Money::from_cents(50000));
        assert!(budget.validate().is_ok());

        budget.amount = Money::from_cents(-100);
        assert_eq!(budget.validate(), Err(BudgetValidationError::NegativeBudget));

        budget.amount = Money::from_cents(i64::MAX);
        assert_eq!(budget.validate(), Err(BudgetValidationError::AmountTooLarge));

        let budget = Budget::new(CategoryId::new(), Money::zero()).with_dates(
            NaiveDate::from_ymd_opt(2025, 2, 1),
            NaiveDate::from_ymd_opt(2025, 1, 1),
        );
        assert_eq!(budget.validate(), Err(BudgetValidationError::EndBeforeStart));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let budget = Budget::new(CategoryId::new(), Money::from_cents(1200));
        let json = serde_json::to_string(&budget).unwrap();
        assert!(!json.contains("name"));
        assert!(!json.contains("start_date"));

        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, deserialized);
    }
}
