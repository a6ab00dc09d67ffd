//! Notifications emitted by state transitions.

use super::direction::SlideDirection;
use super::view::View;
use chrono::NaiveDate;
use serde::Serialize;

/// Callback-style event the binding layer forwards to the host.
///
/// A transition emits zero or more of these, in the order it performs its
/// steps. A no-op transition emits none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    /// A value was committed (`onChange`).
    Change(NaiveDate),
    /// The displayed page moved (`onNavigate`).
    Navigate {
        /// Navigation target.
        date: NaiveDate,
        /// Edge the new page enters from.
        slide: SlideDirection,
        /// View shown after the move.
        view: View,
    },
    /// The focused date changed at the active view's cell unit
    /// (`onCurrentDateChange`).
    CurrentDateChange(NaiveDate),
    /// The view level changed (`onViewChange`).
    ViewChange(View),
}
