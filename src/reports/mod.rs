//! Reports module for Cashpulse
//!
//! Renders reconciliation results for the terminal and for export.

pub mod budget_overview;

pub use budget_overview::BudgetOverviewReport;
