//! Date range CLI commands
//!
//! Converts between calendar months and explicit date ranges.

use clap::Subcommand;

use super::parse_date_arg;
use crate::config::settings::Settings;
use crate::error::{CashpulseError, CashpulseResult};
use crate::models::MonthYear;
use crate::services::period::{
    convert_to_date, dates_are_full_month_range, format_month_friendly, get_full_month_range,
    parse_month,
};
use crate::services::PeriodService;

/// Range subcommands
#[derive(Subcommand)]
pub enum RangeCommands {
    /// Show the date range covering a calendar month
    Month {
        /// Month number or name (e.g., "3", "March", "mar")
        month: String,
        /// Four-digit year
        year: i32,
    },

    /// Check whether two dates span exactly one calendar month
    Check {
        /// Start date (YYYY-MM-DD)
        from: String,
        /// End date (YYYY-MM-DD)
        to: String,
    },

    /// Show the month containing a date (invalid dates mean today)
    Of {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Read the month field as a zero-based index (01 = February)
        #[arg(long)]
        zero_based_month: bool,
    },
}

/// Handle a range command
pub fn handle_range_command(settings: &Settings, cmd: RangeCommands) -> CashpulseResult<()> {
    let period_service = PeriodService::new(settings);

    match cmd {
        RangeCommands::Month { month, year } => {
            let month = parse_month(&month)
                .ok_or_else(|| CashpulseError::Validation(format!("Invalid month: {}", month)))?;

            let range = period_service
                .update_date_range_from_month_year(Some(month), Some(year))
                .ok_or_else(|| {
                    let bounds = period_service.year_bounds();
                    CashpulseError::Validation(format!(
                        "Year {} is outside the accepted range {}-{}",
                        year,
                        bounds.start(),
                        bounds.end()
                    ))
                })?;

            let (from, to) = range.to_iso_strings();
            println!("{}", format_month_friendly(MonthYear { month, year }));
            println!("  From: {}", from);
            println!("  To:   {}", to);
        }

        RangeCommands::Check { from, to } => {
            let from = parse_date_arg(&from)?;
            let to = parse_date_arg(&to)?;

            if dates_are_full_month_range(Some(from), Some(to)) {
                println!(
                    "{}..{} is a full month ({})",
                    from,
                    to,
                    format_month_friendly(MonthYear::of(from))
                );
            } else {
                println!("{}..{} is not a full month", from, to);
            }
        }

        RangeCommands::Of {
            date,
            zero_based_month,
        } => {
            let date = convert_to_date(&date, zero_based_month);
            let range = get_full_month_range(date);
            let (from, to) = range.to_iso_strings();

            println!("{}", format_month_friendly(MonthYear::of(date)));
            println!("  From: {}", from);
            println!("  To:   {}", to);
        }
    }

    Ok(())
}
