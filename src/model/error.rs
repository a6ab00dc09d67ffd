//! Error types for the navigation core.
//!
//! The core has exactly one failure mode: contradictory configuration at
//! initialization. Out-of-range targets and invalid dates are expected
//! steady-state inputs and are handled as no-ops or `None`, never as errors.

use super::view::View;
use chrono::NaiveDate;
use thiserror::Error;

/// Misconfiguration detected while building a calendar.
///
/// All variants are fatal: the core refuses to produce a state rather than
/// operate on a configuration it cannot honor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The lower bound lies after the upper bound.
    #[error("Invalid date range: min {min} is after max {max}")]
    InvalidRange {
        /// Configured lower bound.
        min: NaiveDate,
        /// Configured upper bound.
        max: NaiveDate,
    },

    /// The configured view list is empty.
    #[error("At least one view must be configured")]
    NoViews,

    /// A view appears more than once, making its ordinal ambiguous.
    #[error("View '{0}' is configured more than once")]
    DuplicateView(View),

    /// The requested initial view is not part of the configured views.
    #[error("View '{0}' is not among the configured views")]
    UnconfiguredView(View),

    /// A view name could not be parsed.
    #[error("Unknown view '{0}' (expected month, year, decade or century)")]
    UnknownView(String),
}
