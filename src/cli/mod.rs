//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod range;
pub mod snapshot;

pub use budget::{handle_budget_command, BudgetCommands};
pub use range::{handle_range_command, RangeCommands};
pub use snapshot::{handle_snapshot_command, SnapshotCommands};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::error::{CashpulseError, CashpulseResult};
use crate::services::period::parse_iso_date;

/// Read a JSON input file, returning an error if it doesn't exist
pub fn read_json_input<T, P>(path: P) -> CashpulseResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(CashpulseError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| CashpulseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| CashpulseError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date_arg(value: &str) -> CashpulseResult<NaiveDate> {
    parse_iso_date(value.trim()).ok_or_else(|| {
        CashpulseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}
