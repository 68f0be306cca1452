//! Holding snapshot and investment return models
//!
//! A snapshot is a dated balance for an asset or debt. An investment return
//! links two snapshots of the same holding exactly one month apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{HoldingId, SnapshotId};
use super::money::Money;

/// A point-in-time balance for a holding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingSnapshot {
    #[serde(default)]
    pub id: SnapshotId,

    pub holding_id: HoldingId,

    pub date: NaiveDate,

    pub balance: Money,
}

impl HoldingSnapshot {
    /// Create a new snapshot with a fresh id
    pub fn new(holding_id: HoldingId, date: NaiveDate, balance: Money) -> Self {
        Self {
            id: SnapshotId::new(),
            holding_id,
            date,
            balance,
        }
    }
}

impl fmt::Display for HoldingSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.holding_id.short(),
            self.date.format("%Y-%m-%d"),
            self.balance
        )
    }
}

/// Contributions and withdrawals between two consecutive monthly snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingInvestmentReturn {
    pub start_holding_snapshot_id: SnapshotId,
    pub end_holding_snapshot_id: SnapshotId,
    pub total_contributions: Money,
    pub total_withdrawals: Money,
}

impl HoldingInvestmentReturn {
    /// Balance change not explained by money moved in or out
    ///
    /// `end - start - contributions + withdrawals`
    pub fn net_gain(&self, start_balance: Money, end_balance: Money) -> Money {
        end_balance - start_balance - self.total_contributions + self.total_withdrawals
    }

    /// Net gain as a fraction of the starting balance plus contributions
    ///
    /// Returns `None` when nothing was invested.
    pub fn simple_return(&self, start_balance: Money, end_balance: Money) -> Option<f64> {
        let base = start_balance + self.total_contributions;
        if base.is_zero() {
            return None;
        }
        Some(self.net_gain(start_balance, end_balance).cents() as f64 / base.cents() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(contributions: i64, withdrawals: i64) -> HoldingInvestmentReturn {
        HoldingInvestmentReturn {
            start_holding_snapshot_id: SnapshotId::new(),
            end_holding_snapshot_id: SnapshotId::new(),
            total_contributions: Money::from_cents(contributions),
            total_withdrawals: Money::from_cents(withdrawals),
        }
    }

    #[test]
    fn test_net_gain_excludes_cash_moves() {
        let r = record(50_000, 10_000);
        // 1000.00 -> 1450.00 with +500 in and -100 out is a 50.00 gain
        let gain = r.net_gain(Money::from_cents(100_000), Money::from_cents(145_000));
        assert_eq!(gain.cents(), 5_000);
    }

    #[test]
    fn test_net_loss() {
        let r = record(0, 0);
        let gain = r.net_gain(Money::from_cents(100_000), Money::from_cents(97_500));
        assert_eq!(gain.cents(), -2_500);
    }

    #[test]
    fn test_simple_return() {
        let r = record(0, 0);
        let ratio = r
            .simple_return(Money::from_cents(100_000), Money::from_cents(110_000))
            .unwrap();
        assert!((ratio - 0.10).abs() < 1e-9);

        assert_eq!(r.simple_return(Money::zero(), Money::from_cents(500)), None);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = HoldingSnapshot::new(
            HoldingId::new(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Money::from_cents(12_345),
        );
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""date":"2024-01-01""#));
        assert!(json.contains(r#""balance":12345"#));
        let back: HoldingSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
