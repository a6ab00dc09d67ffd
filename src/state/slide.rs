//! Slide-direction inference from a state change.

use crate::model::{SlideDirection, Views};
use crate::state::NavigationState;

/// Derive the animation hint for the change `old -> new`.
///
/// - View changed: `Top` when the new view sits earlier (finer) in the
///   configured list, `Bottom` otherwise.
/// - Same view, different focused date: `Left` when the new date is later,
///   `Right` otherwise.
/// - Nothing changed: the previous hint is kept.
pub fn slide_direction(
    views: &Views,
    old: &NavigationState,
    new: &NavigationState,
) -> SlideDirection {
    if old.view != new.view {
        return if views.index_of(new.view) < views.index_of(old.view) {
            SlideDirection::Top
        } else {
            SlideDirection::Bottom
        };
    }

    if old.current_date != new.current_date {
        return if new.current_date > old.current_date {
            SlideDirection::Left
        } else {
            SlideDirection::Right
        };
    }

    old.slide
}
