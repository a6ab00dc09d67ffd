//! View levels and the registry of configured levels.

use super::date::{self, Granularity};
use super::error::CalendarError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ===== View =====

/// One level of the calendar hierarchy, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Days of one month.
    Month,
    /// Months of one year.
    Year,
    /// Years of one decade.
    Decade,
    /// Decades of one century.
    Century,
}

impl View {
    /// Every level in natural fine-to-coarse order.
    pub const ALL: [View; 4] = [View::Month, View::Year, View::Decade, View::Century];

    /// Lowercase name used by the CLI and config file.
    pub fn name(self) -> &'static str {
        match self {
            View::Month => "month",
            View::Year => "year",
            View::Decade => "decade",
            View::Century => "century",
        }
    }

    /// Span covered by one page of this view.
    ///
    /// Range checks for navigation and page-crossing detection use this.
    pub fn granularity(self) -> Granularity {
        match self {
            View::Month => Granularity::Month,
            View::Year => Granularity::Year,
            View::Decade => Granularity::Decade,
            View::Century => Granularity::Century,
        }
    }

    /// Span covered by one cell of this view.
    ///
    /// Used to decide whether a move changed the focused cell at all.
    pub fn unit(self) -> Granularity {
        match self {
            View::Month => Granularity::Day,
            View::Year => Granularity::Month,
            View::Decade => Granularity::Year,
            View::Century => Granularity::Decade,
        }
    }

    /// How far one page move advances: a month at the month level, then
    /// 1, 10 and 100 years.
    pub fn step(self) -> Step {
        match self {
            View::Month => Step::new(Granularity::Month, 1),
            View::Year => Step::new(Granularity::Year, 1),
            View::Decade => Step::new(Granularity::Year, 10),
            View::Century => Step::new(Granularity::Year, 100),
        }
    }

    /// Cells per grid row, i.e. how many units an up/down cell move spans.
    pub fn row_len(self) -> i64 {
        match self {
            View::Month => 7,
            View::Year | View::Decade | View::Century => 4,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        View::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CalendarError::UnknownView(name.to_string()))
    }
}

// ===== Step =====

/// Unit and multiplier of a page move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Calendar unit the step is expressed in.
    pub unit: Granularity,
    /// Number of units per page.
    pub multiplier: u32,
}

impl Step {
    /// `multiplier` units of `unit`.
    pub const fn new(unit: Granularity, multiplier: u32) -> Self {
        Self { unit, multiplier }
    }

    /// Apply the step forwards or backwards. `None` on overflow.
    pub fn apply(self, date: NaiveDate, forward: bool) -> Option<NaiveDate> {
        let amount = i64::from(self.multiplier);
        date::add(date, if forward { amount } else { -amount }, self.unit)
    }
}

// ===== Views =====

/// The caller's ordered subsequence of view levels, finest first.
///
/// Non-empty and duplicate-free by construction. `next`/`prev` never leave
/// the configured list: at either end they return the view unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Views(Vec<View>);

impl Views {
    /// Validate a view list.
    ///
    /// # Errors
    ///
    /// [`CalendarError::NoViews`] for an empty list and
    /// [`CalendarError::DuplicateView`] when a level repeats.
    pub fn new(views: impl IntoIterator<Item = View>) -> Result<Self, CalendarError> {
        let mut list: Vec<View> = Vec::new();
        for view in views {
            if list.contains(&view) {
                return Err(CalendarError::DuplicateView(view));
            }
            list.push(view);
        }
        if list.is_empty() {
            return Err(CalendarError::NoViews);
        }
        Ok(Self(list))
    }

    /// All four levels, Month through Century.
    pub fn all() -> Self {
        Self(View::ALL.to_vec())
    }

    /// Views in configured order.
    pub fn as_slice(&self) -> &[View] {
        &self.0
    }

    /// Number of configured views.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ordinal position of `view` in the configured list.
    pub fn index_of(&self, view: View) -> Option<usize> {
        self.0.iter().position(|v| *v == view)
    }

    /// Whether `view` is configured.
    pub fn contains(&self, view: View) -> bool {
        self.index_of(view).is_some()
    }

    /// First configured view; the one that commits values.
    pub fn finest(&self) -> View {
        self.0[0]
    }

    /// Last configured view.
    pub fn coarsest(&self) -> View {
        self.0[self.0.len() - 1]
    }

    /// Whether drill-down from `view` is a no-op.
    pub fn is_finest(&self, view: View) -> bool {
        self.finest() == view
    }

    /// Whether drill-up from `view` is a no-op.
    pub fn is_coarsest(&self, view: View) -> bool {
        self.coarsest() == view
    }

    /// Drill-up target: the next coarser configured view, or `view` itself.
    pub fn next(&self, view: View) -> View {
        self.index_of(view)
            .and_then(|i| self.0.get(i + 1))
            .copied()
            .unwrap_or(view)
    }

    /// Drill-down target: the next finer configured view, or `view` itself.
    pub fn prev(&self, view: View) -> View {
        self.index_of(view)
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.0.get(i))
            .copied()
            .unwrap_or(view)
    }

    /// Equality granularity at `view`.
    pub fn unit_of(&self, view: View) -> Granularity {
        view.unit()
    }

    /// Page step at `view`.
    pub fn step_of(&self, view: View) -> Step {
        view.step()
    }
}

impl Default for Views {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== View Tests =====

    #[test]
    fn view_parses_case_insensitively() {
        assert_eq!("Decade".parse::<View>(), Ok(View::Decade));
        assert_eq!(" month ".parse::<View>(), Ok(View::Month));
        assert_eq!(
            "week".parse::<View>(),
            Err(CalendarError::UnknownView("week".to_string()))
        );
    }

    #[test]
    fn steps_match_level() {
        assert_eq!(View::Month.step(), Step::new(Granularity::Month, 1));
        assert_eq!(View::Year.step(), Step::new(Granularity::Year, 1));
        assert_eq!(View::Decade.step(), Step::new(Granularity::Year, 10));
        assert_eq!(View::Century.step(), Step::new(Granularity::Year, 100));
    }

    #[test]
    fn units_are_one_level_finer_than_granularity() {
        assert_eq!(View::Month.unit(), Granularity::Day);
        assert_eq!(View::Year.unit(), Granularity::Month);
        assert_eq!(View::Decade.unit(), Granularity::Year);
        assert_eq!(View::Century.unit(), Granularity::Decade);
    }

    #[test]
    fn step_apply_goes_both_ways() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");
        assert_eq!(
            View::Decade.step().apply(date, true),
            NaiveDate::from_ymd_opt(2034, 6, 15)
        );
        assert_eq!(
            View::Month.step().apply(date, false),
            NaiveDate::from_ymd_opt(2024, 5, 15)
        );
    }

    // ===== Views Tests =====

    #[test]
    fn views_reject_empty_list() {
        assert_eq!(Views::new(Vec::new()), Err(CalendarError::NoViews));
    }

    #[test]
    fn views_reject_duplicates() {
        assert_eq!(
            Views::new([View::Month, View::Year, View::Month]),
            Err(CalendarError::DuplicateView(View::Month))
        );
    }

    #[test]
    fn next_and_prev_saturate_at_boundaries() {
        let views = Views::all();
        assert_eq!(views.next(View::Month), View::Year);
        assert_eq!(views.next(View::Century), View::Century);
        assert_eq!(views.prev(View::Year), View::Month);
        assert_eq!(views.prev(View::Month), View::Month);
    }

    #[test]
    fn subsequence_skips_unconfigured_levels() {
        let views = Views::new([View::Month, View::Decade]).expect("valid views");
        assert_eq!(views.next(View::Month), View::Decade);
        assert_eq!(views.prev(View::Decade), View::Month);
        assert_eq!(views.finest(), View::Month);
        assert_eq!(views.coarsest(), View::Decade);
        assert!(!views.contains(View::Year));
    }

    #[test]
    fn unconfigured_view_is_its_own_neighbour() {
        let views = Views::new([View::Month, View::Decade]).expect("valid views");
        assert_eq!(views.next(View::Year), View::Year);
        assert_eq!(views.prev(View::Year), View::Year);
    }

    #[test]
    fn single_view_is_both_finest_and_coarsest() {
        let views = Views::new([View::Year]).expect("valid views");
        assert!(views.is_finest(View::Year));
        assert!(views.is_coarsest(View::Year));
        assert_eq!(views.len(), 1);
    }
}
