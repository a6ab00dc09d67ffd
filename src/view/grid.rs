//! Cell grids for each view level (pure).
//!
//! A grid is the page of cells the current view shows around the focused
//! date, with per-cell flags the renderer turns into styles. Rows have
//! [`View::row_len`] cells, so vertical cell moves line up with the layout.

use crate::model::date::{self, DateRange};
use crate::model::{Granularity, View};
use crate::state::NavigationState;
use chrono::{Datelike, Duration, NaiveDate};

/// One cell of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Date handed to cell activation.
    pub date: NaiveDate,
    /// Belongs to a neighbouring page (leading/trailing days, first/last
    /// year of a decade, first/last decade of a century).
    pub outside: bool,
    /// Selectable at the view's cell unit.
    pub in_range: bool,
    /// Holds the focused date.
    pub focused: bool,
    /// Holds the committed value.
    pub selected: bool,
    /// Contains today.
    pub today: bool,
}

/// The page shown for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// View the page belongs to.
    pub view: View,
    /// Cells in display order, one `Vec` per row.
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// The focused cell, if it lies on this page.
    pub fn focused(&self) -> Option<&Cell> {
        self.cells().find(|cell| cell.focused)
    }
}

/// Build the page for `state.view` around `state.current_date`.
pub fn build_grid(state: &NavigationState, range: &DateRange, today: NaiveDate) -> Grid {
    let view = state.view;
    let anchor = state.current_date;
    let unit = view.unit();

    let dates: Vec<(NaiveDate, bool)> = match view {
        View::Month => month_dates(anchor),
        View::Year => year_dates(anchor),
        View::Decade => span_dates(anchor, Granularity::Decade, 1),
        View::Century => span_dates(anchor, Granularity::Century, 10),
    };

    let cells: Vec<Cell> = dates
        .into_iter()
        .map(|(date, outside)| Cell {
            date,
            outside,
            in_range: range.contains(date, unit),
            focused: date::eq(date, anchor, unit),
            selected: state.value.is_some_and(|value| date::eq(date, value, unit)),
            today: date::eq(date, today, unit),
        })
        .collect();

    let row_len = usize::try_from(view.row_len()).unwrap_or(1).max(1);
    Grid {
        view,
        rows: cells.chunks(row_len).map(<[Cell]>::to_vec).collect(),
    }
}

/// Six weeks starting on the Sunday on or before the 1st.
fn month_dates(anchor: NaiveDate) -> Vec<(NaiveDate, bool)> {
    let first = date::start_of(anchor, Granularity::Month);
    let lead = i64::from(first.weekday().num_days_from_sunday());
    let Some(start) = first.checked_sub_signed(Duration::days(lead)) else {
        return Vec::new();
    };

    start
        .iter_days()
        .take(42)
        .map(|day| (day, day.month() != first.month() || day.year() != first.year()))
        .collect()
}

fn year_dates(anchor: NaiveDate) -> Vec<(NaiveDate, bool)> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(anchor.year(), month, 1))
        .map(|date| (date, false))
        .collect()
}

/// Twelve cells: the span containing `anchor` plus one neighbour on each
/// side, `years_per_cell` years apart.
fn span_dates(anchor: NaiveDate, span: Granularity, years_per_cell: i32) -> Vec<(NaiveDate, bool)> {
    let start = date::start_of(anchor, span).year();
    (-1..=10)
        .filter_map(|offset: i32| {
            let year = start.checked_add(offset.checked_mul(years_per_cell)?)?;
            let date = NaiveDate::from_ymd_opt(year, 1, 1)?;
            Some((date, offset == -1 || offset == 10))
        })
        .collect()
}
