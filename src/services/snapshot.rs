//! Investment return periods
//!
//! Validates that two holding snapshots bound exactly one calendar month,
//! saves the end snapshot, and only then submits the investment return. Each
//! check stops at the first failure with its own message.

use chrono::{Datelike, NaiveDate};

use crate::error::{CashpulseError, CashpulseResult, SnapshotPeriodError};
use crate::models::{
    dollars_to_cents, HoldingId, HoldingInvestmentReturn, HoldingSnapshot, Money, SnapshotId,
};
use crate::services::period::{first_day_of_month, parse_iso_date};

/// Request to save a snapshot: update when `id` is set, otherwise create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotUpsert {
    pub id: Option<SnapshotId>,
    pub holding_id: HoldingId,
    pub date: NaiveDate,
    pub balance: Money,
}

/// Storage for holding snapshots
pub trait SnapshotRepository {
    /// Update or create a snapshot, returning the saved record
    fn upsert(&mut self, request: SnapshotUpsert) -> CashpulseResult<HoldingSnapshot>;
}

/// Destination for completed investment return records
pub trait InvestmentReturnSink {
    fn submit(&mut self, record: &HoldingInvestmentReturn) -> CashpulseResult<()>;
}

impl InvestmentReturnSink for Vec<HoldingInvestmentReturn> {
    fn submit(&mut self, record: &HoldingInvestmentReturn) -> CashpulseResult<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Snapshots held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotRepository {
    snapshots: Vec<HoldingSnapshot>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing snapshots
    pub fn from_snapshots(snapshots: Vec<HoldingSnapshot>) -> Self {
        Self { snapshots }
    }

    pub fn get(&self, id: SnapshotId) -> Option<&HoldingSnapshot> {
        self.snapshots.iter().find(|s| s.id == id)
    }

    pub fn snapshots(&self) -> &[HoldingSnapshot] {
        &self.snapshots
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn upsert(&mut self, request: SnapshotUpsert) -> CashpulseResult<HoldingSnapshot> {
        match request.id {
            Some(id) => {
                let existing = self
                    .snapshots
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or_else(|| CashpulseError::snapshot_not_found(id.to_string()))?;
                existing.holding_id = request.holding_id;
                existing.date = request.date;
                existing.balance = request.balance;
                Ok(existing.clone())
            }
            None => {
                let snapshot = HoldingSnapshot::new(request.holding_id, request.date, request.balance);
                self.snapshots.push(snapshot.clone());
                Ok(snapshot)
            }
        }
    }
}

/// Form values for a new investment return, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvestmentReturnForm {
    pub start_snapshot_id: SnapshotId,
    /// Date of the start snapshot (`YYYY-MM-DD`)
    pub start_date: String,
    pub end_holding_id: Option<HoldingId>,
    /// Existing end snapshot to update, if any
    pub end_snapshot_id: Option<SnapshotId>,
    pub end_date: String,
    pub end_balance: String,
    /// Decimal amount; empty means zero
    pub total_contributions: String,
    /// Decimal amount; empty means zero
    pub total_withdrawals: String,
}

/// What was written for an accepted investment return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentReturnSubmission {
    pub end_snapshot: HoldingSnapshot,
    pub record: HoldingInvestmentReturn,
}

/// Whole months from `start` to `end`, correct across year boundaries
pub fn month_difference(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Check that two snapshot dates bound exactly one calendar month
///
/// Both must be valid `YYYY-MM-DD` dates on the first of their month, with
/// the end exactly one month after the start.
pub fn validate_period(
    start_date: &str,
    end_date: &str,
) -> Result<(NaiveDate, NaiveDate), SnapshotPeriodError> {
    let (Some(start), Some(end)) = (parse_iso_date(start_date.trim()), parse_iso_date(end_date.trim()))
    else {
        return Err(SnapshotPeriodError::InvalidDateFormat);
    };

    if start != first_day_of_month(start) {
        return Err(SnapshotPeriodError::StartNotFirstOfMonth);
    }

    if start > end {
        return Err(SnapshotPeriodError::StartAfterEnd);
    }

    if month_difference(start, end) != 1 {
        return Err(SnapshotPeriodError::NotExactlyOneMonth);
    }

    if end != first_day_of_month(end) {
        return Err(SnapshotPeriodError::EndNotFirstOfMonth);
    }

    Ok((start, end))
}

/// Parse an optional amount field; blank is zero
fn parse_optional_amount(input: &str) -> Option<Money> {
    let cleaned = Money::strip_thousands_separators(input);
    if cleaned.is_empty() {
        return Some(Money::zero());
    }
    Money::from_decimal_str(&cleaned)
}

/// Runs the investment return workflow against a repository and sink
pub struct SnapshotPeriodValidator<'a, R, S> {
    snapshots: &'a mut R,
    returns: &'a mut S,
}

impl<'a, R, S> SnapshotPeriodValidator<'a, R, S>
where
    R: SnapshotRepository,
    S: InvestmentReturnSink,
{
    pub fn new(snapshots: &'a mut R, returns: &'a mut S) -> Self {
        Self { snapshots, returns }
    }

    /// Validate the form, save the end snapshot, then submit the return
    ///
    /// Nothing is written until every local check passes. If the snapshot
    /// cannot be saved, no return record is submitted.
    pub fn submit(
        &mut self,
        form: &InvestmentReturnForm,
    ) -> Result<InvestmentReturnSubmission, SnapshotPeriodError> {
        let (_, end_date) = validate_period(&form.start_date, &form.end_date)?;

        let end_holding_id = form
            .end_holding_id
            .ok_or(SnapshotPeriodError::MissingEndHolding)?;
        if form.end_date.trim().is_empty() {
            return Err(SnapshotPeriodError::MissingEndDate);
        }
        if form.end_balance.trim().is_empty() {
            return Err(SnapshotPeriodError::MissingEndBalance);
        }

        let total_contributions = parse_optional_amount(&form.total_contributions)
            .ok_or(SnapshotPeriodError::InvalidContributions)?;
        let total_withdrawals = parse_optional_amount(&form.total_withdrawals)
            .ok_or(SnapshotPeriodError::InvalidWithdrawals)?;

        let balance_cents = dollars_to_cents(&Money::strip_thousands_separators(&form.end_balance))
            .unwrap_or_else(|| {
                tracing::warn!(balance = %form.end_balance, "unparseable end balance, saving as zero");
                0
            });

        let request = SnapshotUpsert {
            id: form.end_snapshot_id,
            holding_id: end_holding_id,
            date: end_date,
            balance: Money::from_cents(balance_cents),
        };

        let end_snapshot = self.snapshots.upsert(request).map_err(|e| {
            tracing::warn!(error = %e, "end snapshot upsert failed");
            SnapshotPeriodError::UpsertFailed(e.to_string())
        })?;
        tracing::info!(
            snapshot = %end_snapshot.id,
            holding = %end_snapshot.holding_id,
            "end snapshot saved"
        );

        let record = HoldingInvestmentReturn {
            start_holding_snapshot_id: form.start_snapshot_id,
            end_holding_snapshot_id: end_snapshot.id,
            total_contributions,
            total_withdrawals,
        };

        self.returns.submit(&record).map_err(|e| {
            tracing::error!(error = %e, "investment return submission failed");
            SnapshotPeriodError::Unexpected
        })?;
        tracing::info!(
            start = %record.start_holding_snapshot_id,
            end = %record.end_holding_snapshot_id,
            "investment return submitted"
        );

        Ok(InvestmentReturnSubmission {
            end_snapshot,
            record,
        })
    }
}
