//! Logical navigation directions and slide-animation hints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical navigation direction.
///
/// Up and Down move between view levels (coarser and finer); Left and Right
/// move backwards and forwards in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Coarser view.
    Up,
    /// Finer view.
    Down,
    /// Earlier in time.
    Left,
    /// Later in time.
    Right,
}

impl Direction {
    /// Swap Left and Right; Up and Down are never affected.
    pub fn mirrored(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            other => other,
        }
    }

    /// Left or Right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Animation hint carried by a navigation notification.
    ///
    /// Intentionally inverted: content reached by moving left or up enters
    /// from the right, content reached by moving right or down enters from
    /// the left.
    pub fn slide(self) -> SlideDirection {
        match self {
            Direction::Left | Direction::Up => SlideDirection::Right,
            Direction::Right | Direction::Down => SlideDirection::Left,
        }
    }
}

/// Screen edge the next page should slide in from.
///
/// Advisory only; it drives an animation and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    /// Enter from the left edge.
    Left,
    /// Enter from the right edge.
    Right,
    /// Enter from the top edge.
    Top,
    /// Enter from the bottom edge.
    Bottom,
    /// No transition yet.
    #[default]
    None,
}

impl fmt::Display for SlideDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlideDirection::Left => "left",
            SlideDirection::Right => "right",
            SlideDirection::Top => "top",
            SlideDirection::Bottom => "bottom",
            SlideDirection::None => "none",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirroring_swaps_only_horizontal_directions() {
        assert_eq!(Direction::Left.mirrored(), Direction::Right);
        assert_eq!(Direction::Right.mirrored(), Direction::Left);
        assert_eq!(Direction::Up.mirrored(), Direction::Up);
        assert_eq!(Direction::Down.mirrored(), Direction::Down);
    }

    #[test]
    fn slide_hint_is_inverted() {
        assert_eq!(Direction::Left.slide(), SlideDirection::Right);
        assert_eq!(Direction::Up.slide(), SlideDirection::Right);
        assert_eq!(Direction::Right.slide(), SlideDirection::Left);
        assert_eq!(Direction::Down.slide(), SlideDirection::Left);
    }

    #[test]
    fn default_slide_is_none() {
        assert_eq!(SlideDirection::default(), SlideDirection::None);
        assert_eq!(SlideDirection::None.to_string(), "none");
    }
}
