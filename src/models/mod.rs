//! Core data models for Cashpulse
//!
//! This module contains the data structures the reconciliation logic works
//! on: money, date ranges, budgets, cash flow entries, and holding snapshots.

pub mod budget;
pub mod cash_flow;
pub mod holding;
pub mod ids;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetValidationError};
pub use cash_flow::{CashFlowEntry, EntryType};
pub use holding::{HoldingInvestmentReturn, HoldingSnapshot};
pub use ids::{BudgetId, CategoryId, EntryId, HoldingId, InvalidId, SnapshotId};
pub use money::{cents_to_dollars, dollars_to_cents, Money};
pub use period::{DateRange, MonthYear};
