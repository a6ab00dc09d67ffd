//! Key identifiers and the direction resolver.
//!
//! Resolution is pure: it depends on the key and the mirroring flag, never on
//! navigation state.

use crate::model::Direction;
use std::fmt;

/// Key identifiers the navigation core understands, named after the DOM
/// `KeyboardEvent.key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowUp`
    ArrowUp,
    /// `ArrowDown`
    ArrowDown,
    /// `ArrowLeft`
    ArrowLeft,
    /// `ArrowRight`
    ArrowRight,
    /// `Enter`
    Enter,
    /// Any key without a navigation meaning.
    Unmapped,
}

impl Key {
    /// Look up a key by its DOM name. Unknown names map to [`Key::Unmapped`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Enter" => Key::Enter,
            _ => Key::Unmapped,
        }
    }

    /// DOM name of the key; `Unidentified` for unmapped keys.
    pub fn name(self) -> &'static str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Enter => "Enter",
            Key::Unmapped => "Unidentified",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical action a key resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Navigate in a direction.
    Move(Direction),
    /// Commit or drill into the focused cell.
    Activate,
}

/// Resolve `key` to a logical action.
///
/// In mirrored (right-to-left) mode Left and Right swap. Unmapped keys
/// resolve to `None`.
pub fn resolve(key: Key, rtl: bool) -> Option<InputAction> {
    let direction = match key {
        Key::ArrowUp => Direction::Up,
        Key::ArrowDown => Direction::Down,
        Key::ArrowLeft => Direction::Left,
        Key::ArrowRight => Direction::Right,
        Key::Enter => return Some(InputAction::Activate),
        Key::Unmapped => return None,
    };
    Some(InputAction::Move(if rtl {
        direction.mirrored()
    } else {
        direction
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_resolve_to_directions() {
        assert_eq!(
            resolve(Key::ArrowUp, false),
            Some(InputAction::Move(Direction::Up))
        );
        assert_eq!(
            resolve(Key::ArrowLeft, false),
            Some(InputAction::Move(Direction::Left))
        );
    }

    #[test]
    fn rtl_swaps_left_and_right_only() {
        assert_eq!(
            resolve(Key::ArrowLeft, true),
            Some(InputAction::Move(Direction::Right))
        );
        assert_eq!(
            resolve(Key::ArrowRight, true),
            Some(InputAction::Move(Direction::Left))
        );
        assert_eq!(
            resolve(Key::ArrowDown, true),
            Some(InputAction::Move(Direction::Down))
        );
    }

    #[test]
    fn enter_activates_regardless_of_mirroring() {
        assert_eq!(resolve(Key::Enter, false), Some(InputAction::Activate));
        assert_eq!(resolve(Key::Enter, true), Some(InputAction::Activate));
    }

    #[test]
    fn unknown_key_names_resolve_to_nothing() {
        let key = Key::from_name("PageDown");
        assert_eq!(key, Key::Unmapped);
        assert_eq!(resolve(key, false), None);
    }

    #[test]
    fn names_round_trip_for_mapped_keys() {
        for key in [
            Key::ArrowUp,
            Key::ArrowDown,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::Enter,
        ] {
            assert_eq!(Key::from_name(key.name()), key);
        }
    }
}
