//! Granularity-aware date comparison, arithmetic and range clamping.
//!
//! Every comparison in the navigation core goes through [`Granularity`]:
//! two dates are "equal" at a level when they fall into the same
//! day/month/year/decade/century, never by raw instant equality.

use super::error::CalendarError;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// ISO-8601 calendar date format accepted at every input boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ===== Granularity =====

/// Precision at which two dates are compared or stepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Calendar day.
    Day,
    /// Calendar month.
    Month,
    /// Calendar year.
    Year,
    /// Ten years starting at a multiple of ten.
    Decade,
    /// A hundred years starting at a multiple of a hundred.
    Century,
}

impl Granularity {
    /// Ordinal key of the bucket `date` falls into at this granularity.
    ///
    /// Decades and centuries use floor division so that year -1 belongs to
    /// the decade starting at -10.
    fn bucket(self, date: NaiveDate) -> i64 {
        let year = i64::from(date.year());
        match self {
            Granularity::Day => i64::from(date.num_days_from_ce()),
            Granularity::Month => year * 12 + i64::from(date.month0()),
            Granularity::Year => year,
            Granularity::Decade => year.div_euclid(10),
            Granularity::Century => year.div_euclid(100),
        }
    }

    /// Number of months in one step of this granularity, `None` for days.
    fn months(self) -> Option<i64> {
        match self {
            Granularity::Day => None,
            Granularity::Month => Some(1),
            Granularity::Year => Some(12),
            Granularity::Decade => Some(120),
            Granularity::Century => Some(1200),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Year => "year",
            Granularity::Decade => "decade",
            Granularity::Century => "century",
        };
        f.write_str(name)
    }
}

// ===== Comparisons =====

/// Compare two dates truncated to `granularity`.
pub fn compare(a: NaiveDate, b: NaiveDate, granularity: Granularity) -> Ordering {
    granularity.bucket(a).cmp(&granularity.bucket(b))
}

/// `a` and `b` fall into the same bucket at `granularity`.
pub fn eq(a: NaiveDate, b: NaiveDate, granularity: Granularity) -> bool {
    compare(a, b, granularity) == Ordering::Equal
}

/// `a` is strictly after `b` at `granularity`.
pub fn gt(a: NaiveDate, b: NaiveDate, granularity: Granularity) -> bool {
    compare(a, b, granularity) == Ordering::Greater
}

/// `a` is strictly before `b` at `granularity`.
pub fn lt(a: NaiveDate, b: NaiveDate, granularity: Granularity) -> bool {
    compare(a, b, granularity) == Ordering::Less
}

/// First day of the bucket `date` falls into at `granularity`.
///
/// Saturates to [`NaiveDate::MIN`] when the bucket starts before the
/// representable range.
pub fn start_of(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    let year = date.year();
    let start = match granularity {
        Granularity::Day => Some(date),
        Granularity::Month => NaiveDate::from_ymd_opt(year, date.month(), 1),
        Granularity::Year => NaiveDate::from_ymd_opt(year, 1, 1),
        Granularity::Decade => NaiveDate::from_ymd_opt(year - year.rem_euclid(10), 1, 1),
        Granularity::Century => NaiveDate::from_ymd_opt(year - year.rem_euclid(100), 1, 1),
    };
    start.unwrap_or(NaiveDate::MIN)
}

/// True if `date` lies within `[min, max]` when all three are truncated to
/// `granularity`.
///
/// A decade page therefore accepts any date of a decade that overlaps the
/// range, even when the exact day is outside it.
pub fn in_range(date: NaiveDate, min: NaiveDate, max: NaiveDate, granularity: Granularity) -> bool {
    !lt(date, min, granularity) && !gt(date, max, granularity)
}

/// `max(min, min(date, max))`.
pub fn clamp(date: NaiveDate, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    date.min(max).max(min)
}

// ===== Arithmetic =====

/// Move `date` by `amount` steps of `granularity`.
///
/// Month-based steps keep the day of month where possible and otherwise
/// land on the last day of the target month (Jan 31 + 1 month = Feb 28/29).
/// Returns `None` when the result leaves the representable date range.
pub fn add(date: NaiveDate, amount: i64, granularity: Granularity) -> Option<NaiveDate> {
    match granularity.months() {
        None => {
            let days = Days::new(amount.unsigned_abs());
            if amount >= 0 {
                date.checked_add_days(days)
            } else {
                date.checked_sub_days(days)
            }
        }
        Some(per_step) => {
            let total = amount.checked_mul(per_step)?;
            let months = Months::new(u32::try_from(total.unsigned_abs()).ok()?);
            if total >= 0 {
                date.checked_add_months(months)
            } else {
                date.checked_sub_months(months)
            }
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// Anything that is not a real calendar date yields `None`; callers treat
/// that as "no date" rather than as an error.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

// ===== DateRange =====

/// Closed `[min, max]` range of selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    min: NaiveDate,
    max: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: NaiveDate, max: NaiveDate) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> NaiveDate {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> NaiveDate {
        self.max
    }

    /// Pull `date` into the range.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        clamp(date, self.min, self.max)
    }

    /// Clamp an optional date; `None` stays "no date".
    pub fn clamp_opt(&self, date: Option<NaiveDate>) -> Option<NaiveDate> {
        date.map(|d| self.clamp(d))
    }

    /// Granularity-aware membership test, see [`in_range`].
    pub fn contains(&self, date: NaiveDate, granularity: Granularity) -> bool {
        in_range(date, self.min, self.max, granularity)
    }
}

impl Default for DateRange {
    /// 1900-01-01 through 2099-12-31.
    fn default() -> Self {
        Self {
            min: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN),
            max: NaiveDate::from_ymd_opt(2099, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
    }

    // ===== Comparison Tests =====

    #[test]
    fn eq_ignores_finer_fields() {
        assert!(eq(d(2024, 6, 1), d(2024, 6, 30), Granularity::Month));
        assert!(!eq(d(2024, 6, 30), d(2024, 7, 1), Granularity::Month));
        assert!(eq(d(2020, 1, 1), d(2029, 12, 31), Granularity::Decade));
        assert!(!eq(d(2019, 12, 31), d(2020, 1, 1), Granularity::Decade));
        assert!(eq(d(2000, 1, 1), d(2099, 12, 31), Granularity::Century));
    }

    #[test]
    fn gt_and_lt_are_strict_at_granularity() {
        assert!(gt(d(2025, 1, 1), d(2024, 12, 31), Granularity::Year));
        assert!(!gt(d(2024, 12, 31), d(2024, 1, 1), Granularity::Year));
        assert!(lt(d(2019, 6, 1), d(2020, 6, 1), Granularity::Decade));
        assert!(!lt(d(2021, 6, 1), d(2020, 6, 1), Granularity::Decade));
    }

    #[test]
    fn negative_years_floor_into_their_decade() {
        let minus_one = d(-1, 1, 1);
        let minus_ten = d(-10, 1, 1);
        assert!(eq(minus_one, minus_ten, Granularity::Decade));
        assert_eq!(start_of(minus_one, Granularity::Decade), minus_ten);
    }

    #[test]
    fn start_of_truncates_each_granularity() {
        let date = d(2024, 6, 15);
        assert_eq!(start_of(date, Granularity::Day), date);
        assert_eq!(start_of(date, Granularity::Month), d(2024, 6, 1));
        assert_eq!(start_of(date, Granularity::Year), d(2024, 1, 1));
        assert_eq!(start_of(date, Granularity::Decade), d(2020, 1, 1));
        assert_eq!(start_of(date, Granularity::Century), d(2000, 1, 1));
    }

    // ===== Range Tests =====

    #[test]
    fn in_range_accepts_partial_overlap_at_coarse_granularity() {
        let min = d(2020, 3, 15);
        let max = d(2020, 9, 15);
        assert!(!in_range(d(2020, 3, 1), min, max, Granularity::Day));
        assert!(in_range(d(2020, 3, 1), min, max, Granularity::Month));
        assert!(in_range(d(2029, 1, 1), min, max, Granularity::Decade));
        assert!(!in_range(d(2030, 1, 1), min, max, Granularity::Decade));
    }

    #[test]
    fn clamp_pulls_into_range() {
        let min = d(2020, 1, 1);
        let max = d(2020, 12, 31);
        assert_eq!(clamp(d(2019, 5, 5), min, max), min);
        assert_eq!(clamp(d(2021, 5, 5), min, max), max);
        assert_eq!(clamp(d(2020, 5, 5), min, max), d(2020, 5, 5));
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        let result = DateRange::new(d(2021, 1, 1), d(2020, 1, 1));
        assert_eq!(
            result,
            Err(CalendarError::InvalidRange {
                min: d(2021, 1, 1),
                max: d(2020, 1, 1),
            })
        );
    }

    #[test]
    fn date_range_accepts_single_day() {
        let range = DateRange::new(d(2020, 2, 29), d(2020, 2, 29)).expect("valid range");
        assert_eq!(range.clamp(d(1999, 1, 1)), d(2020, 2, 29));
    }

    #[test]
    fn clamp_opt_keeps_none() {
        let range = DateRange::default();
        assert_eq!(range.clamp_opt(None), None);
        assert_eq!(range.clamp_opt(Some(d(1800, 1, 1))), Some(d(1900, 1, 1)));
    }

    // ===== Arithmetic Tests =====

    #[test]
    fn add_months_clamps_day_to_month_end() {
        assert_eq!(add(d(2024, 1, 31), 1, Granularity::Month), Some(d(2024, 2, 29)));
        assert_eq!(add(d(2023, 3, 31), -1, Granularity::Month), Some(d(2023, 2, 28)));
    }

    #[test]
    fn add_years_handles_leap_day() {
        assert_eq!(add(d(2024, 2, 29), 1, Granularity::Year), Some(d(2025, 2, 28)));
        assert_eq!(add(d(2024, 2, 29), -10, Granularity::Decade), Some(d(1924, 2, 29)));
    }

    #[test]
    fn add_days_moves_both_ways() {
        assert_eq!(add(d(2024, 6, 30), 1, Granularity::Day), Some(d(2024, 7, 1)));
        assert_eq!(add(d(2024, 6, 1), -7, Granularity::Day), Some(d(2024, 5, 25)));
    }

    #[test]
    fn add_overflow_is_none() {
        assert_eq!(add(NaiveDate::MAX, 1, Granularity::Day), None);
        assert_eq!(add(NaiveDate::MAX, 1, Granularity::Century), None);
        assert_eq!(add(NaiveDate::MIN, -1, Granularity::Month), None);
    }

    // ===== Parsing Tests =====

    #[test]
    fn parse_date_accepts_iso() {
        assert_eq!(parse_date("2024-06-15"), Some(d(2024, 6, 15)));
        assert_eq!(parse_date("  2024-06-15\n"), Some(d(2024, 6, 15)));
    }

    #[test]
    fn parse_date_normalizes_invalid_to_none() {
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }
}
