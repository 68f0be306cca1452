//! Date range canonicalization
//!
//! Keeps the two views of a period in sync: an explicit from/to range and a
//! calendar month/year. Also owns the fail-soft date parser used by forms and
//! the picker state machine that decides which view is active.

use chrono::{Datelike, NaiveDate, Utc};
use std::ops::RangeInclusive;

use crate::config::settings::Settings;
use crate::models::{DateRange, MonthYear};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in a month (1-based month), accounting for leap years
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from((next - first).num_days()).ok()
}

/// First calendar day of the date's month
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last calendar day of the date's month
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    days_in_month(date.year(), date.month())
        .and_then(|last| date.with_day(last))
        .unwrap_or(date)
}

/// The full calendar month containing `date`
pub fn get_full_month_range(date: NaiveDate) -> DateRange {
    DateRange {
        from: Some(first_day_of_month(date)),
        to: Some(last_day_of_month(date)),
    }
}

/// Whether `from..to` covers exactly one calendar month
///
/// Both ends must be present, in the same month and year, with `from` on the
/// 1st and `to` on that month's last day.
pub fn dates_are_full_month_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let (Some(from), Some(to)) = (from, to) else {
        return false;
    };

    from.year() == to.year()
        && from.month() == to.month()
        && from.day() == 1
        && to == last_day_of_month(to)
}

/// Parse a strict `YYYY-MM-DD` string, falling back to today
///
/// See [`convert_to_date_or`].
pub fn convert_to_date(input: &str, no_month_adjustment: bool) -> NaiveDate {
    convert_to_date_or(input, no_month_adjustment, Utc::now().date_naive())
}

/// Parse a strict `YYYY-MM-DD` string, falling back to `fallback`
///
/// The month field must be in 1..=12 and the day in 1..=31. With
/// `no_month_adjustment` the month field is read as a zero-based index, so
/// `2024-01-15` means February 15th and `2024-12-01` is out of range.
/// Malformed input, out-of-range fields, and dates that don't exist on the
/// calendar (`2024-02-30`) all return the fallback instead of failing.
pub fn convert_to_date_or(input: &str, no_month_adjustment: bool, fallback: NaiveDate) -> NaiveDate {
    match parse_iso_parts(input) {
        Some((year, month, day)) => {
            let calendar_month = if no_month_adjustment { month + 1 } else { month };
            match NaiveDate::from_ymd_opt(year, calendar_month, day) {
                Some(date) => date,
                None => {
                    tracing::debug!(input, "date does not exist, falling back");
                    fallback
                }
            }
        }
        None => {
            tracing::debug!(input, "invalid date input, falling back");
            fallback
        }
    }
}

/// Strictly parse a `YYYY-MM-DD` date, with no fallback
///
/// Unlike [`NaiveDate::parse_from_str`] this requires zero-padded fields.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let (year, month, day) = parse_iso_parts(input)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Split `YYYY-MM-DD` into numeric fields with range checks on month and day
fn parse_iso_parts(input: &str) -> Option<(i32, u32, u32)> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year: i32 = input[0..4].parse().ok()?;
    let month: u32 = input[5..7].parse().ok()?;
    let day: u32 = input[8..10].parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some((year, month, day))
}

/// Whether the typed inputs differ from the current range
///
/// Compares against the `YYYY-MM-DD` form of each end; an open end is an
/// empty string.
pub fn has_changes(from_input: &str, to_input: &str, current: &DateRange) -> bool {
    let (from, to) = current.to_iso_strings();
    from_input != from || to_input != to
}

/// Parse a month given as a number (`3`) or an English name (`March`, `mar`)
pub fn parse_month(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(month) = s.parse::<u32>() {
        return (1..=12).contains(&month).then_some(month);
    }

    let lower = s.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase().starts_with(&lower))
        .map(|index| index as u32 + 1)
}

/// Format a month as "January 2025"
pub fn format_month_friendly(month_year: MonthYear) -> String {
    match MONTH_NAMES.get(month_year.month.wrapping_sub(1) as usize) {
        Some(name) => format!("{} {}", name, month_year.year),
        None => month_year.to_string(),
    }
}

/// Which of the two picker views is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// An arbitrary from/to range
    SpecificRange,
    /// A whole calendar month
    MonthYear(MonthYear),
}

/// Inputs held by the two-mode date picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePickerState {
    pub range: DateRange,
    /// Selected 1-based month, if any
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl DatePickerState {
    /// Build the picker state for a range, filling month/year when it is a full month
    pub fn from_range(range: DateRange) -> Self {
        match range.from {
            Some(from) if dates_are_full_month_range(range.from, range.to) => Self {
                range,
                month: Some(from.month()),
                year: Some(from.year()),
            },
            _ => Self {
                range,
                month: None,
                year: None,
            },
        }
    }

    /// Derive the active view from the current inputs
    ///
    /// Month/year mode needs a selected month and a range covering exactly one
    /// calendar month; everything else is a specific range.
    pub fn mode(&self) -> RangeMode {
        match (self.month, self.range.from) {
            (Some(_), Some(from)) if dates_are_full_month_range(self.range.from, self.range.to) => {
                RangeMode::MonthYear(MonthYear::of(from))
            }
            _ => RangeMode::SpecificRange,
        }
    }
}

/// A single user edit to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEdit {
    /// Both ends replaced at once
    Range(DateRange),
    /// Only the start changed
    From(Option<NaiveDate>),
    /// Only the end changed
    To(Option<NaiveDate>),
    Month(Option<u32>),
    Year(Option<i32>),
}

/// Period operations that depend on settings and the current date
pub struct PeriodService<'a> {
    settings: &'a Settings,
    today: NaiveDate,
}

impl<'a> PeriodService<'a> {
    /// Create a new period service anchored at today's UTC date
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_today(settings, Utc::now().date_naive())
    }

    /// Create a period service with a fixed "today"
    pub fn with_today(settings: &'a Settings, today: NaiveDate) -> Self {
        Self { settings, today }
    }

    /// Years accepted by month/year mode
    pub fn year_bounds(&self) -> RangeInclusive<i32> {
        let window = self.settings.year_window.max(0);
        let year = self.today.year();
        year.saturating_sub(window)..=year.saturating_add(window)
    }

    /// The full-month range for a 1-based month and year
    ///
    /// Returns `None` unless both are present, the month is valid, and the
    /// year is inside [`Self::year_bounds`].
    pub fn update_date_range_from_month_year(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Option<DateRange> {
        let (month, year) = (month?, year?);
        if !self.year_bounds().contains(&year) {
            return None;
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(get_full_month_range(first))
    }

    /// Apply one edit and return the next picker state
    ///
    /// Replacing the whole range re-infers month/year; a reversed replacement
    /// is ignored. Editing a single end
    /// clears the month selection instead, even if the result happens to be a
    /// full month. Month or year edits recompute the range when both are set
    /// and in bounds, and otherwise leave the range alone.
    pub fn apply_edit(&self, state: &DatePickerState, edit: PickerEdit) -> DatePickerState {
        let mut next = state.clone();

        match edit {
            PickerEdit::Range(range) => {
                if DateRange::new(range.from, range.to).is_none() {
                    tracing::debug!(%range, "ignoring reversed range edit");
                    return next;
                }
                next.range = range;
                match range.from {
                    Some(from) if dates_are_full_month_range(range.from, range.to) => {
                        next.month = Some(from.month());
                        next.year = Some(from.year());
                    }
                    _ => next.month = None,
                }
            }
            PickerEdit::From(from) => {
                next.range.from = from;
                if matches!((from, next.range.to), (Some(f), Some(t)) if f > t) {
                    next.range.to = None;
                }
                next.month = None;
            }
            PickerEdit::To(to) => {
                next.range.to = to;
                if matches!((next.range.from, to), (Some(f), Some(t)) if f > t) {
                    next.range.from = None;
                }
                next.month = None;
            }
            PickerEdit::Month(month) => {
                next.month = month;
                if let Some(range) = self.update_date_range_from_month_year(month, next.year) {
                    next.range = range;
                }
            }
            PickerEdit::Year(year) => {
                next.year = year;
                if let Some(range) = self.update_date_range_from_month_year(next.month, year) {
                    next.range = range;
                }
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), Some(31));
        assert_eq!(days_in_month(2025, 4), Some(30));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn test_full_month_range() {
        let range = get_full_month_range(date(2024, 2, 17));
        assert_eq!(range.from, Some(date(2024, 2, 1)));
        assert_eq!(range.to, Some(date(2024, 2, 29)));

        let range = get_full_month_range(date(2024, 12, 31));
        assert_eq!(range.from, Some(date(2024, 12, 1)));
        assert_eq!(range.to, Some(date(2024, 12, 31)));
    }

    #[test]
    fn test_full_month_range_is_recognized_for_every_day() {
        let mut day = date(2023, 1, 1);
        while day <= date(2025, 12, 31) {
            let range = get_full_month_range(day);
            assert!(
                dates_are_full_month_range(range.from, range.to),
                "not a full month for {}",
                day
            );
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_dates_are_full_month_range() {
        assert!(dates_are_full_month_range(Some(date(2023, 2, 1)), Some(date(2023, 2, 28))));
        assert!(!dates_are_full_month_range(Some(date(2024, 2, 1)), Some(date(2024, 2, 28))));
        assert!(!dates_are_full_month_range(Some(date(2024, 1, 2)), Some(date(2024, 1, 31))));
        assert!(!dates_are_full_month_range(Some(date(2024, 1, 1)), Some(date(2024, 2, 29))));
        assert!(!dates_are_full_month_range(Some(date(2023, 1, 1)), Some(date(2024, 1, 31))));
        assert!(!dates_are_full_month_range(None, Some(date(2024, 1, 31))));
        assert!(!dates_are_full_month_range(Some(date(2024, 1, 1)), None));
    }

    #[test]
    fn test_convert_to_date() {
        let fallback = date(2000, 1, 1);
        assert_eq!(convert_to_date_or("2024-03-09", false, fallback), date(2024, 3, 9));
        assert_eq!(convert_to_date_or("2024-02-29", false, fallback), date(2024, 2, 29));
    }

    #[test]
    fn test_convert_to_date_zero_based_month() {
        let fallback = date(2000, 1, 1);
        assert_eq!(convert_to_date_or("2024-01-15", true, fallback), date(2024, 2, 15));
        assert_eq!(convert_to_date_or("2024-11-30", true, fallback), date(2024, 12, 30));
        assert_eq!(convert_to_date_or("2024-12-01", true, fallback), fallback);
    }

    #[test]
    fn test_convert_to_date_falls_back() {
        let fallback = date(2000, 1, 1);
        for input in [
            "2024-02-30",
            "2023-02-29",
            "2024-04-31",
            "2024-13-01",
            "2024-00-10",
            "2024-01-00",
            "2024-01-32",
            "2024-1-5",
            "20240105",
            "2024/01/05",
            "abcd-ef-gh",
            " 2024-01-05",
            "",
        ] {
            assert_eq!(convert_to_date_or(input, false, fallback), fallback, "{}", input);
        }
    }

    #[test]
    fn test_parse_iso_date_is_strict() {
        assert_eq!(parse_iso_date("2024-01-05"), Some(date(2024, 1, 5)));
        assert_eq!(parse_iso_date("2024-1-5"), None);
        assert_eq!(parse_iso_date("2024-02-30"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_convert_to_date_invalid_is_today() {
        let before = Utc::now().date_naive();
        let parsed = convert_to_date("2024-02-30", false);
        let after = Utc::now().date_naive();
        assert!(parsed == before || parsed == after);
    }

    #[test]
    fn test_has_changes() {
        let range = DateRange::between(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert!(!has_changes("2024-01-01", "2024-01-31", &range));
        assert!(has_changes("2024-01-01", "2024-01-30", &range));
        assert!(has_changes("2024-1-1", "2024-01-31", &range));

        assert!(!has_changes("", "", &DateRange::open()));
        assert!(has_changes("2024-01-01", "", &DateRange::open()));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("3"), Some(3));
        assert_eq!(parse_month("12"), Some(12));
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("March"), Some(3));
        assert_eq!(parse_month("sep"), Some(9));
        assert_eq!(parse_month("ju"), None);
        assert_eq!(parse_month("smarch"), None);
    }

    #[test]
    fn test_format_month_friendly() {
        let jan = MonthYear { month: 1, year: 2025 };
        assert_eq!(format_month_friendly(jan), "January 2025");
    }

    #[test]
    fn test_update_from_month_year() {
        let settings = Settings::default();
        let service = PeriodService::with_today(&settings, today());

        let range = service
            .update_date_range_from_month_year(Some(2), Some(2024))
            .unwrap();
        assert_eq!(range.from, Some(date(2024, 2, 1)));
        assert_eq!(range.to, Some(date(2024, 2, 29)));

        assert_eq!(service.update_date_range_from_month_year(None, Some(2024)), None);
        assert_eq!(service.update_date_range_from_month_year(Some(2), None), None);
        assert_eq!(service.update_date_range_from_month_year(Some(13), Some(2024)), None);
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let settings = Settings::default();
        let service = PeriodService::with_today(&settings, today());

        assert_eq!(service.year_bounds(), 2005..=2045);
        assert!(service.update_date_range_from_month_year(Some(1), Some(2005)).is_some());
        assert!(service.update_date_range_from_month_year(Some(1), Some(2045)).is_some());
        assert!(service.update_date_range_from_month_year(Some(1), Some(2004)).is_none());
        assert!(service.update_date_range_from_month_year(Some(1), Some(2046)).is_none());
    }

    #[test]
    fn test_huge_year_window_saturates() {
        let settings = Settings {
            year_window: i32::MAX,
            ..Settings::default()
        };
        let service = PeriodService::with_today(&settings, today());

        assert_eq!(*service.year_bounds().end(), i32::MAX);
        assert_eq!(
            service.update_date_range_from_month_year(Some(2), Some(2024)),
            Some(get_full_month_range(date(2024, 2, 1)))
        );
    }

    #[test]
    fn test_state_from_range_infers_mode() {
        let full = get_full_month_range(date(2025, 3, 10));
        let state = DatePickerState::from_range(full);
        assert_eq!(state.month, Some(3));
        assert_eq!(state.year, Some(2025));
        assert_eq!(
            state.mode(),
            RangeMode::MonthYear(MonthYear { month: 3, year: 2025 })
        );

        let partial = DateRange::between(date(2025, 3, 2), date(2025, 3, 31)).unwrap();
        let state = DatePickerState::from_range(partial);
        assert_eq!(state.month, None);
        assert_eq!(state.mode(), RangeMode::SpecificRange);
    }

    #[test]
    fn test_full_range_edit_recomputes_month() {
        let settings = Settings::default();
        let service = PeriodService::with_today(&settings, today());
        let state = DatePickerState::default();

        let next = service.apply_edit(&state, PickerEdit::Range(get_full_month_range(date(2024, 11, 5))));
        assert_eq!(next.month, Some(11));
        assert_eq!(next.year, Some(2024));
        assert_eq!(
            next.mode(),
            RangeMode::MonthYear(MonthYear { month: 11, year: 2024 })
        );

        let partial = DateRange::between(date(2024, 11, 5), date(2024, 11, 20)).unwrap();
        let next = service.apply_edit(&next, PickerEdit::Range(partial));
        assert_eq!(next.month, None);
        assert_eq!(next.year, Some(2024));
        assert_eq!(next.mode(), RangeMode::SpecificRange);
    }

    #[test]
    fn test_reversed_range_edit_is_ignored() {
        let settings = Settings::default();
        let service = PeriodService::with_today(&settings, today());
        let state = DatePickerState::from_range(get_full_month_range(date(2024, 5, 1)));

        let reversed = DateRange {
            from: Some(date(2024, 6, 30)),
            to: Some(date(2024, 6, 1)),
        };
        let next = service.apply_edit(&state, PickerEdit::Range(reversed));
        assert_eq!(next, state);
    }

    #[test]
    fn test_single_end_edit_clears_month_without_reinferring() {
        let settings = Settings::default();
        let service = PeriodService::with_today(&settings, today());
        let state = DatePickerState::from_range(DateRange::between(date(2024, 5, 2), date(2024, 5, 31)).unwrap());

        // The edit produces a full month, but the selector stays cleared
        let next = service.apply_edit(&state, PickerEdit::From(Some(date(2024, 5, 1))));
        assert_eq!(next.range, get_full_month_range(date(2024, 5, 1)));
        assert_eq!(next.month, None);
        assert_eq!(next.mode(), RangeMode::SpecificRange);
    }

    #[test]
    fn test_single_end_edit_keeps_range_ordered() {
        let settings = Settings::default();
        let service = PeriodService::with_today(&settings, today());
        let state = DatePickerState::from_range(get_full_month_range(date(2024, 5, 1)));

        let next = service.apply_edit(&state, PickerEdit::From(Some(date(2024, 6, 10))));
        assert_eq!(next.range.from, Some(date(2024, 6, 10)));
        assert_eq!(next.range.to, None);

        let next = service.apply_edit(&state, PickerEdit::To(Some(date(2024, 4, 10))));
        assert_eq!(next.range.from, None);
        assert_eq!(next.range.to, Some(date(2024, 4, 10)));
    }

    #[test]
    fn test_month_and_year_edits_recompute_range() {
        let settings = Settings::default();
        let service = PeriodService::with_today(&settings, today());
        let state = DatePickerState::default();

        let next = service.apply_edit(&state, PickerEdit::Month(Some(2)));
        assert_eq!(next.range, DateRange::open());

        let next = service.apply_edit(&next, PickerEdit::Year(Some(2024)));
        assert_eq!(next.range, get_full_month_range(date(2024, 2, 1)));
        assert_eq!(
            next.mode(),
            RangeMode::MonthYear(MonthYear { month: 2, year: 2024 })
        );

        let next = service.apply_edit(&next, PickerEdit::Month(Some(3)));
        assert_eq!(next.range, get_full_month_range(date(2024, 3, 1)));
    }

    #[test]
    fn test_out_of_window_year_is_ignored() {
        let settings = Settings::default();
        let service = PeriodService::with_today(&settings, today());
        let state = DatePickerState::from_range(get_full_month_range(date(2024, 2, 1)));

        let next = service.apply_edit(&state, PickerEdit::Year(Some(1900)));
        assert_eq!(next.year, Some(1900));
        assert_eq!(next.range, state.range);
    }
}
