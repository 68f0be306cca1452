//! Money type and currency conversion
//!
//! Internally stores amounts in cents (i64). Decimal strings only exist at the
//! input/output boundary and are converted with [`dollars_to_cents`] and
//! [`cents_to_dollars`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Convert a decimal amount string to cents
///
/// The input is parsed as a floating-point number and multiplied by 100, then
/// rounded half away from zero (`f64::round`). Surrounding whitespace and a
/// single currency symbol after the optional sign (`$10.50`, `-$10.50`) are
/// accepted so that [`cents_to_dollars`] output parses back. Thousands
/// separators are not stripped here; see [`Money::strip_thousands_separators`].
///
/// Returns `None` when the input is not a finite number.
///
/// # Examples
/// ```
/// use cashpulse::models::money::dollars_to_cents;
/// assert_eq!(dollars_to_cents("100.50"), Some(10050));
/// assert_eq!(dollars_to_cents("abc"), None);
/// ```
pub fn dollars_to_cents(input: &str) -> Option<i64> {
    let s = input.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let s = s.strip_prefix('$').unwrap_or(s);

    // f64 parsing accepts "inf" and "NaN"; only plain numerals are amounts
    let starts_numeric = s
        .bytes()
        .next()
        .is_some_and(|b| b.is_ascii_digit() || b == b'.');
    let numeric_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'-' | b'+'));
    if !starts_numeric || !numeric_chars {
        return None;
    }

    let parsed: f64 = s.parse().ok()?;
    let cents = (parsed * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        return None;
    }

    let cents = cents as i64;
    Some(if negative { -cents } else { cents })
}

/// Format cents as a two-decimal currency string (`10050` -> `"$100.50"`)
pub fn cents_to_dollars(cents: i64) -> String {
    Money::from_cents(cents).to_string()
}

impl Money {
    /// Largest magnitude accepted from input files, in cents
    ///
    /// Totals over hundreds of amounts this size still fit in an `i64`.
    pub const MAX_ABS_CENTS: i64 = 10_000_000_000_000_000;

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use cashpulse::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Parse a decimal amount string, see [`dollars_to_cents`]
    pub fn from_decimal_str(input: &str) -> Option<Self> {
        dollars_to_cents(input).map(Self)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Check the magnitude is at most [`Self::MAX_ABS_CENTS`]
    pub const fn is_within_limit(&self) -> bool {
        self.0 >= -Self::MAX_ABS_CENTS && self.0 <= Self::MAX_ABS_CENTS
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Remove thousands separators and inner whitespace from user input
    ///
    /// This is the cleaning step that runs before [`dollars_to_cents`].
    pub fn strip_thousands_separators(input: &str) -> String {
        input
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect()
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format as a plain decimal with no symbol (`400.00`, `-15.00`)
    pub fn format_plain(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Format as a signed decimal without a symbol
    ///
    /// Zero and positive amounts carry an explicit `+` (`+10.00`, `+0.00`),
    /// negative amounts a `-` (`-15.00`).
    pub fn format_signed(&self) -> String {
        let sign = if self.is_negative() { '-' } else { '+' };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
