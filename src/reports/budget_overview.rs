//! Budget Overview Report
//!
//! Renders a [`BudgetOverview`] for the terminal or as CSV.

use std::io::Write;

use crate::error::{CashpulseError, CashpulseResult};
use crate::models::{DateRange, Money};
use crate::services::BudgetOverview;

/// A budget overview tied to the range it was computed for
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    pub range: DateRange,
    pub overview: BudgetOverview,
}

impl BudgetOverviewReport {
    pub fn new(range: DateRange, overview: BudgetOverview) -> Self {
        Self { range, overview }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let fmt = |m: Money| m.format_with_symbol(symbol);

        output.push_str(&format!("Budget Overview - {}\n", self.range));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.overview.rows.is_empty() {
            output.push_str("No budgets found.\n");
        } else {
            output.push_str(&format!(
                "{:<28} {:>12} {:>12} {:>12}  {}\n",
                "Budget", "Budgeted", "Spent", "Remaining", "Status"
            ));
            output.push_str(&"-".repeat(72));
            output.push('\n');

            for row in &self.overview.rows {
                output.push_str(&format!(
                    "{:<28} {:>12} {:>12} {:>12}  {} {}\n",
                    row.name,
                    fmt(row.budgeted),
                    fmt(row.spent),
                    fmt(row.remaining),
                    row.status.icon(),
                    row.status
                ));
            }
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>12} {:>12}  {}\n",
            "TOTAL",
            fmt(self.overview.total_budgeted),
            fmt(self.overview.total_spent),
            self.overview.over_under_display(),
            self.overview.status.icon()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CashpulseResult<()> {
        let (from, to) = self.range.to_iso_strings();

        writeln!(writer, "From,To,Budget,Budgeted,Spent,Remaining,Status")
            .map_err(|e| CashpulseError::Io(e.to_string()))?;

        for row in &self.overview.rows {
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                from,
                to,
                csv_field(&row.name),
                row.budgeted.format_plain(),
                row.spent.format_plain(),
                row.remaining.format_plain(),
                row.status,
            )
            .map_err(|e| CashpulseError::Io(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},{},TOTAL,{},{},{},{}",
            from,
            to,
            self.overview.total_budgeted.format_plain(),
            self.overview.total_spent.format_plain(),
            self.overview.over_under_display(),
            self.overview.status,
        )
        .map_err(|e| CashpulseError::Io(e.to_string()))?;

        Ok(())
    }
}

/// Quote a CSV field when it contains a delimiter or quote
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
