//! TUI rendering and terminal management (impure shell)

mod calendar;
pub mod constants;
pub mod grid;
mod help;
pub mod labels;
mod styles;

pub use calendar::{render_calendar, CalendarWidget};
pub use help::render_help_overlay;
pub use styles::{CalendarStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::model::{CalendarError, KeyAction, Notification};
use crate::state::{BindingMode, CalendarBinding, CalendarConfig, Event, NavigationState};
use chrono::NaiveDate;
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Calendar configuration rejected at startup
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

/// Host options that do not affect navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOptions {
    /// Show the "today" footer and accept the `t` key.
    pub footer: bool,
    /// Color switch.
    pub color: ColorConfig,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            footer: true,
            color: ColorConfig::from_env_and_args(false),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    binding: CalendarBinding,
    key_bindings: KeyBindings,
    today: NaiveDate,
    options: PickerOptions,
    styles: CalendarStyles,
    help_visible: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(config: &CalendarConfig, options: PickerOptions) -> Result<Self, TuiError> {
        // Validate before touching the terminal so errors print normally.
        let today = local_today();
        let binding = CalendarBinding::new(config, today, BindingMode::default())?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, binding, today, options))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Idle ticks only redraw when the local
    /// date rolled over.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if !event::poll(TICK_INTERVAL)? {
                if self.refresh_today(local_today()) {
                    self.draw()?;
                }
                continue;
            }

            match event::read()? {
                TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                TermEvent::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn with_terminal(
        terminal: Terminal<B>,
        binding: CalendarBinding,
        today: NaiveDate,
        options: PickerOptions,
    ) -> Self {
        Self {
            terminal,
            binding,
            key_bindings: KeyBindings::default(),
            today,
            styles: CalendarStyles::with_color_config(options.color),
            options,
            help_visible: false,
        }
    }

    /// Current navigation state.
    pub fn state(&self) -> &NavigationState {
        self.binding.state()
    }

    #[cfg(test)]
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    #[cfg(test)]
    pub(crate) fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Escape closes help overlay before acting as quit
        if key.code == KeyCode::Esc && self.help_visible {
            self.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if self.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        let event = match action {
            KeyAction::Quit => return true,
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                return false;
            }
            KeyAction::Calendar { key, ctrl } => Event::Key { key, ctrl },
            KeyAction::CellMove(direction) => Event::CellMove(direction),
            KeyAction::Today if self.options.footer => Event::FooterActivate(self.today),
            KeyAction::Today => return false,
            KeyAction::DrillUp => Event::DrillUp,
            KeyAction::MoveBack => Event::MoveBack,
            KeyAction::MoveForward => Event::MoveForward,
        };

        let notifications = self.binding.dispatch(event);
        for notification in &notifications {
            log_notification(notification);
        }
        false
    }

    /// Update "today". Returns true when the date changed.
    fn refresh_today(&mut self, today: NaiveDate) -> bool {
        if today == self.today {
            return false;
        }
        debug!(%today, "Date rolled over");
        self.today = today;
        true
    }

    /// Render the current frame
    pub(crate) fn draw(&mut self) -> Result<(), TuiError> {
        let widget = CalendarWidget {
            controller: self.binding.controller(),
            state: self.binding.state(),
            today: self.today,
            show_footer: self.options.footer,
            styles: &self.styles,
        };
        let help_visible = self.help_visible;

        self.terminal.draw(|frame| {
            render_calendar(frame, frame.area(), &widget);
            if help_visible {
                render_help_overlay(frame);
            }
        })?;

        Ok(())
    }
}

fn log_notification(notification: &Notification) {
    match notification {
        Notification::Change(date) => info!(%date, "Value changed"),
        Notification::Navigate { date, slide, view } => {
            debug!(%date, %slide, %view, "Navigate")
        }
        Notification::CurrentDateChange(date) => debug!(%date, "Current date changed"),
        Notification::ViewChange(view) => debug!(%view, "View changed"),
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
/// Returns the final navigation state; its `value` is the committed date.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_options(
    config: &CalendarConfig,
    options: PickerOptions,
) -> Result<NavigationState, TuiError> {
    let mut app = TuiApp::new(config, options)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result.map(|()| *app.state())
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
