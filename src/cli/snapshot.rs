//! Snapshot CLI commands
//!
//! Validates a one-month holding period and records its investment return.

use std::path::PathBuf;

use clap::Subcommand;
use serde_json::json;

use super::read_json_input;
use crate::config::settings::Settings;
use crate::error::{CashpulseError, CashpulseResult};
use crate::models::period::format_iso;
use crate::models::{HoldingId, HoldingInvestmentReturn, HoldingSnapshot, SnapshotId};
use crate::services::snapshot::validate_period;
use crate::services::{InMemorySnapshotRepository, InvestmentReturnForm, SnapshotPeriodValidator};

/// Snapshot subcommands
#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Check that two snapshot dates bound exactly one month
    Check {
        /// Start snapshot date (YYYY-MM-DD)
        start: String,
        /// End snapshot date (YYYY-MM-DD)
        end: String,
    },

    /// Save the end snapshot and record the investment return for the month
    Pair {
        /// JSON file with an array of existing snapshots
        file: PathBuf,
        /// ID of the start snapshot
        #[arg(long)]
        start: String,
        /// Holding the end snapshot belongs to
        #[arg(long)]
        holding: Option<String>,
        /// Existing end snapshot to update instead of creating one
        #[arg(long)]
        end_id: Option<String>,
        /// End snapshot date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// End snapshot balance (e.g., "1,250.00")
        #[arg(long)]
        balance: String,
        /// Money added during the month
        #[arg(long, default_value = "")]
        contributions: String,
        /// Money taken out during the month
        #[arg(long, default_value = "")]
        withdrawals: String,
    },
}

/// Handle a snapshot command
pub fn handle_snapshot_command(settings: &Settings, cmd: SnapshotCommands) -> CashpulseResult<()> {
    match cmd {
        SnapshotCommands::Check { start, end } => {
            let (start, end) = validate_period(&start, &end)?;
            println!("{} -> {} is a valid one-month return period", start, end);
        }

        SnapshotCommands::Pair {
            file,
            start,
            holding,
            end_id,
            date,
            balance,
            contributions,
            withdrawals,
        } => {
            let snapshots: Vec<HoldingSnapshot> = read_json_input(&file)?;
            let mut repository = InMemorySnapshotRepository::from_snapshots(snapshots);

            let start_id: SnapshotId = start.parse()?;
            let start_snapshot = repository
                .get(start_id)
                .cloned()
                .ok_or_else(|| CashpulseError::snapshot_not_found(&start))?;

            let form = InvestmentReturnForm {
                start_snapshot_id: start_snapshot.id,
                start_date: format_iso(start_snapshot.date),
                end_holding_id: holding
                    .as_deref()
                    .map(str::parse::<HoldingId>)
                    .transpose()?,
                end_snapshot_id: end_id
                    .as_deref()
                    .map(str::parse::<SnapshotId>)
                    .transpose()?,
                end_date: date,
                end_balance: balance,
                total_contributions: contributions,
                total_withdrawals: withdrawals,
            };

            let mut submitted: Vec<HoldingInvestmentReturn> = Vec::new();
            let submission =
                SnapshotPeriodValidator::new(&mut repository, &mut submitted).submit(&form)?;

            let record = &submission.record;
            let end = &submission.end_snapshot;
            let symbol = &settings.currency_symbol;
            let output = json!({
                "end_snapshot": end,
                "investment_return": record,
                "net_gain": record
                    .net_gain(start_snapshot.balance, end.balance)
                    .format_with_symbol(symbol),
                "simple_return": record.simple_return(start_snapshot.balance, end.balance),
            });

            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
