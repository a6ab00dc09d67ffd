//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with methods for simulating key presses and
//! inspecting the rendered picker.

use crate::state::{BindingMode, CalendarBinding, CalendarConfig, NavigationState};
use crate::view::{ColorConfig, PickerOptions, TuiApp, TuiError};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation.
///
/// Empty trailing lines are dropped.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Build a picker for `config` with a fixed "today" on a 60x16 terminal.
    pub fn new(config: &CalendarConfig, today: NaiveDate) -> Result<Self, TuiError> {
        Self::with_size(config, today, 60, 16)
    }

    pub fn with_size(
        config: &CalendarConfig,
        today: NaiveDate,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let binding = CalendarBinding::new(config, today, BindingMode::default())?;
        let options = PickerOptions {
            footer: true,
            color: ColorConfig::new(false),
        };

        Ok(Self {
            app: TuiApp::with_terminal(terminal, binding, today, options),
            running: true,
        })
    }

    /// Send a single key event
    ///
    /// Returns true if the picker quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+Right)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    pub fn state(&self) -> &NavigationState {
        self.app.state()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn help_visible(&self) -> bool {
        self.app.help_visible()
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
