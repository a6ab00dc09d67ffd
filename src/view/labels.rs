//! Header, cell and footer labels.

use crate::model::date;
use crate::model::{Granularity, View};
use chrono::{Datelike, NaiveDate};

/// Weekday captions for the month grid, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Title of the page `date` is on, e.g. `June 2024` or `2020 - 2029`.
pub fn header_label(view: View, date: NaiveDate) -> String {
    match view {
        View::Month => date.format("%B %Y").to_string(),
        View::Year => date.year().to_string(),
        View::Decade => span_label(date, Granularity::Decade, 9),
        View::Century => span_label(date, Granularity::Century, 99),
    }
}

/// Text of one grid cell.
pub fn cell_label(view: View, date: NaiveDate) -> String {
    match view {
        View::Month => date.day().to_string(),
        View::Year => date.format("%b").to_string(),
        View::Decade => date.year().to_string(),
        View::Century => span_label(date, Granularity::Decade, 9),
    }
}

/// Footer caption for the "today" button.
pub fn footer_label(today: NaiveDate) -> String {
    format!("Today: {}", today.format("%A, %B %d, %Y"))
}

fn span_label(date: NaiveDate, granularity: Granularity, length: i32) -> String {
    let start = date::start_of(date, granularity).year();
    format!("{} - {}", start, start.saturating_add(length))
}
