//! Budget CLI commands
//!
//! Reads budgets and cash flow entries from a JSON file and shows how each
//! budget stands for a date range.

use std::path::PathBuf;

use clap::Subcommand;
use serde::Deserialize;

use super::{parse_date_arg, read_json_input};
use crate::config::settings::Settings;
use crate::error::{CashpulseError, CashpulseResult};
use crate::models::{Budget, CashFlowEntry, DateRange};
use crate::reports::BudgetOverviewReport;
use crate::services::budget::entries_in_range;
use crate::services::period::parse_month;
use crate::services::{BudgetOverview, PeriodService};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show spent, remaining, and status for each budget
    Status {
        /// JSON file with `budgets` and `entries` arrays
        file: PathBuf,
        /// Range start (YYYY-MM-DD)
        #[arg(long, conflicts_with_all = ["month", "year"])]
        from: Option<String>,
        /// Range end (YYYY-MM-DD)
        #[arg(long, conflicts_with_all = ["month", "year"])]
        to: Option<String>,
        /// Calendar month (number or name), used with --year
        #[arg(long, requires = "year")]
        month: Option<String>,
        /// Calendar year, used with --month
        #[arg(long, requires = "month")]
        year: Option<i32>,
        /// Print CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
}

/// Input file layout for budget commands
#[derive(Debug, Default, Deserialize)]
pub struct BudgetData {
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub entries: Vec<CashFlowEntry>,
}

/// Handle a budget command
pub fn handle_budget_command(settings: &Settings, cmd: BudgetCommands) -> CashpulseResult<()> {
    match cmd {
        BudgetCommands::Status {
            file,
            from,
            to,
            month,
            year,
            csv,
        } => {
            let range = resolve_range(settings, from, to, month, year)?;
            let data: BudgetData = read_json_input(&file)?;

            for budget in &data.budgets {
                budget.validate().map_err(|e| {
                    CashpulseError::Validation(format!("{}: {}", budget.display_name(), e))
                })?;
            }

            if let Some(entry) = data.entries.iter().find(|e| !e.amount.is_within_limit()) {
                return Err(CashpulseError::Validation(format!(
                    "Entry amount {} is out of range",
                    entry.amount
                )));
            }

            let entries = entries_in_range(&data.entries, &range);
            tracing::debug!(
                total = data.entries.len(),
                in_range = entries.len(),
                "filtered entries to range"
            );

            let overview = BudgetOverview::generate(&data.budgets, &entries);
            let report = BudgetOverviewReport::new(range, overview);

            if csv {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                report.export_csv(&mut handle)?;
            } else {
                print!("{}", report.format_terminal(&settings.currency_symbol));

                let overspent = report.overview.overspent().count();
                if overspent > 0 {
                    println!("\n⚠️  {} budget(s) overspent.", overspent);
                }
            }
        }
    }

    Ok(())
}

/// Build the query range from either explicit dates or a month/year pair
fn resolve_range(
    settings: &Settings,
    from: Option<String>,
    to: Option<String>,
    month: Option<String>,
    year: Option<i32>,
) -> CashpulseResult<DateRange> {
    if let (Some(month), Some(year)) = (month, year) {
        let month = parse_month(&month)
            .ok_or_else(|| CashpulseError::Validation(format!("Invalid month: {}", month)))?;
        let period_service = PeriodService::new(settings);
        return period_service
            .update_date_range_from_month_year(Some(month), Some(year))
            .ok_or_else(|| {
                CashpulseError::Validation(format!("Year {} is outside the accepted range", year))
            });
    }

    let from = from.as_deref().map(parse_date_arg).transpose()?;
    let to = to.as_deref().map(parse_date_arg).transpose()?;

    DateRange::new(from, to).ok_or_else(|| {
        CashpulseError::Validation("The start date must be before the end date.".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_resolve_range_from_month_year() {
        let settings = Settings::default();
        let range =
            resolve_range(&settings, None, None, Some("feb".into()), Some(2024)).unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_resolve_range_explicit() {
        let settings = Settings::default();
        let range = resolve_range(
            &settings,
            Some("2024-01-10".into()),
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(range.to, None);
    }

    #[test]
    fn test_resolve_range_rejects_reversed_and_bad_input() {
        let settings = Settings::default();
        let err = resolve_range(
            &settings,
            Some("2024-02-01".into()),
            Some("2024-01-01".into()),
            None,
            None,
        )
        .unwrap_err();
        assert!(err.is_validation());

        let err = resolve_range(&settings, Some("01/02/2024".into()), None, None, None).unwrap_err();
        assert!(err.is_validation());

        let err = resolve_range(&settings, None, None, Some("13".into()), Some(2024)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_budget_data_defaults() {
        let data: BudgetData = serde_json::from_str("{}").unwrap();
        assert!(data.budgets.is_empty());
        assert!(data.entries.is_empty());
    }
}
