//! Keyboard bindings configuration.

use crate::input::Key;
use crate::model::{Direction, KeyAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default bindings: arrows drive the calendar, `h/j/k/l` move
/// between cells.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and keyboard state are ignored; only code and modifiers
    /// take part in the lookup.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Calendar keys, plain and with Ctrl
        for (code, key) in [
            (KeyCode::Up, Key::ArrowUp),
            (KeyCode::Down, Key::ArrowDown),
            (KeyCode::Left, Key::ArrowLeft),
            (KeyCode::Right, Key::ArrowRight),
        ] {
            bindings.bind(code, KeyModifiers::NONE, KeyAction::Calendar { key, ctrl: false });
            bindings.bind(code, KeyModifiers::CONTROL, KeyAction::Calendar { key, ctrl: true });
        }
        let activate = KeyAction::Calendar {
            key: Key::Enter,
            ctrl: false,
        };
        bindings.bind(KeyCode::Enter, KeyModifiers::NONE, activate);
        bindings.bind(KeyCode::Char(' '), KeyModifiers::NONE, activate);

        // Vim-style cell moves
        bindings.bind(
            KeyCode::Char('h'),
            KeyModifiers::NONE,
            KeyAction::CellMove(Direction::Left),
        );
        bindings.bind(
            KeyCode::Char('j'),
            KeyModifiers::NONE,
            KeyAction::CellMove(Direction::Down),
        );
        bindings.bind(
            KeyCode::Char('k'),
            KeyModifiers::NONE,
            KeyAction::CellMove(Direction::Up),
        );
        bindings.bind(
            KeyCode::Char('l'),
            KeyModifiers::NONE,
            KeyAction::CellMove(Direction::Right),
        );

        // Header and footer buttons
        bindings.bind(KeyCode::Char('t'), KeyModifiers::NONE, KeyAction::Today);
        bindings.bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DrillUp);
        bindings.bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::MoveBack);
        bindings.bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::MoveForward);

        // Application controls
        bindings.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bindings.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        bindings.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bindings.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        bindings.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        bindings
    }
}
