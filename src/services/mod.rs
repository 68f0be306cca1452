//! Service layer for Cashpulse
//!
//! The reconciliation logic: date range canonicalization, budget status,
//! and investment return period validation.

pub mod budget;
pub mod period;
pub mod snapshot;

pub use budget::{BudgetOverview, BudgetRow, BudgetStatus};
pub use period::{DatePickerState, PeriodService, PickerEdit, RangeMode};
pub use snapshot::{
    InMemorySnapshotRepository, InvestmentReturnForm, InvestmentReturnSink,
    InvestmentReturnSubmission, SnapshotPeriodValidator, SnapshotRepository, SnapshotUpsert,
};
