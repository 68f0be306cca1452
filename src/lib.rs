//! Cashpulse - period reconciliation for personal finance
//!
//! This library holds the logic behind a personal finance tracker's period
//! views: money conversion between decimal input and integer cents, calendar
//! month ranges and the date picker that edits them, budget spending status,
//! and the one-month investment return workflow for holding snapshots.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (money, ranges, budgets, snapshots)
//! - `services`: Business logic layer
//! - `reports`: Budget overview rendering
//! - `cli`: Command handlers for the `cashpulse` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use cashpulse::config::{paths::CashpulsePaths, settings::Settings};
//! use cashpulse::services::PeriodService;
//!
//! let paths = CashpulsePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let range = PeriodService::new(&settings).update_date_range_from_month_year(Some(2), Some(2024));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{CashpulseError, SnapshotPeriodError};
