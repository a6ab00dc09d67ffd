//! Calendar styling configuration.
//!
//! Colors mark focus, selection and today's cell; modifiers carry the same
//! information when colors are turned off.

use super::grid::Cell;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit switch, ignoring `NO_COLOR`.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CalendarStyles =====

/// Styles for every calendar element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarStyles {
    /// Page title and enabled header arrows.
    pub header: Style,
    /// Controls that would do nothing.
    pub disabled: Style,
    /// Weekday row.
    pub weekday: Style,
    /// Plain in-page cell.
    pub cell: Style,
    /// Cell of a neighbouring page.
    pub outside: Style,
    /// Focused cell.
    pub focused: Style,
    /// Cell holding the committed value.
    pub selected: Style,
    /// Cell containing today.
    pub today: Style,
    /// "Today" footer.
    pub footer: Style,
    /// Status line.
    pub status: Style,
    /// Outer border.
    pub border: Style,
}

impl CalendarStyles {
    /// Build styles for the given color configuration.
    ///
    /// Without colors, focus is reversed video, selection bold and today
    /// underlined.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let plain = Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            disabled: Style::default().add_modifier(Modifier::DIM),
            weekday: Style::default().add_modifier(Modifier::DIM),
            cell: Style::default(),
            outside: Style::default().add_modifier(Modifier::DIM),
            focused: Style::default().add_modifier(Modifier::REVERSED),
            selected: Style::default().add_modifier(Modifier::BOLD),
            today: Style::default().add_modifier(Modifier::UNDERLINED),
            footer: Style::default(),
            status: Style::default().add_modifier(Modifier::DIM),
            border: Style::default(),
        };

        if !config.colors_enabled() {
            return plain;
        }

        Self {
            header: plain.header.fg(Color::Cyan),
            disabled: plain.disabled.fg(Color::DarkGray),
            weekday: plain.weekday.fg(Color::Yellow),
            outside: plain.outside.fg(Color::DarkGray),
            focused: plain.focused.fg(Color::Black).bg(Color::Cyan).remove_modifier(Modifier::REVERSED),
            selected: plain.selected.fg(Color::Green),
            today: plain.today.fg(Color::Magenta),
            footer: plain.footer.fg(Color::Cyan),
            border: plain.border.fg(Color::Cyan),
            ..plain
        }
    }

    /// Combined style for a grid cell. Focus is applied last so it stays
    /// visible on top of the other flags.
    pub fn cell_style(&self, cell: &Cell) -> Style {
        let mut style = self.cell;
        if cell.outside {
            style = style.patch(self.outside);
        }
        if !cell.in_range {
            style = style.patch(self.disabled);
        }
        if cell.today {
            style = style.patch(self.today);
        }
        if cell.selected {
            style = style.patch(self.selected);
        }
        if cell.focused {
            style = style.patch(self.focused);
        }
        style
    }
}

impl Default for CalendarStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
