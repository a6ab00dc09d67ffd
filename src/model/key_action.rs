//! Domain-level keyboard actions independent of key bindings.

use crate::input::Key;
use crate::model::Direction;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Feed a key straight into the navigation core. Default: arrows, Enter/Space
    Calendar {
        /// Core key identifier.
        key: Key,
        /// Whether Ctrl (or Cmd) was held. Default: Ctrl+arrows
        ctrl: bool,
    },
    /// Move focus one cell or row inside the page. Default: h/j/k/l
    CellMove(Direction),
    /// Jump to today's date, as the footer button does. Default: t
    Today,
    /// Header "drill up" button. Default: Backspace
    DrillUp,
    /// Header "move back" button. Default: [
    MoveBack,
    /// Header "move forward" button. Default: ]
    MoveForward,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the picker. Default: q/Esc/Ctrl+c
    Quit,
}
