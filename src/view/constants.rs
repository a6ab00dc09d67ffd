//! Layout dimension constants for TUI rendering.

/// Width of one grid cell in columns, per view.
///
/// Month cells hold a day number, century cells a `2020 - 2029` span.
pub const MONTH_CELL_WIDTH: u16 = 4;
/// Year view cell: a short month name.
pub const YEAR_CELL_WIDTH: u16 = 6;
/// Decade view cell: a year.
pub const DECADE_CELL_WIDTH: u16 = 6;
/// Century view cell: a decade span.
pub const CENTURY_CELL_WIDTH: u16 = 13;

/// Height of the header line (arrows plus page title).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the footer ("today" button).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event poll timeout. On timeout the host re-reads the clock so "today"
/// follows midnight rollover.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);
