//! Calendar widget: header, grid, footer and status line.

use super::constants::{
    CENTURY_CELL_WIDTH, DECADE_CELL_WIDTH, FOOTER_HEIGHT, HEADER_HEIGHT, MONTH_CELL_WIDTH,
    STATUS_BAR_HEIGHT, YEAR_CELL_WIDTH,
};
use super::grid::{build_grid, Grid};
use super::labels::{cell_label, footer_label, header_label, WEEKDAYS};
use super::styles::CalendarStyles;
use crate::model::{Direction, View};
use crate::state::{NavigationController, NavigationState};
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Everything the renderer needs for one frame.
pub struct CalendarWidget<'a> {
    /// Range, views and availability queries.
    pub controller: &'a NavigationController,
    /// State to draw.
    pub state: &'a NavigationState,
    /// Host's current date.
    pub today: NaiveDate,
    /// Draw the "today" footer.
    pub show_footer: bool,
    /// Resolved styles.
    pub styles: &'a CalendarStyles,
}

fn cell_width(view: View) -> u16 {
    match view {
        View::Month => MONTH_CELL_WIDTH,
        View::Year => YEAR_CELL_WIDTH,
        View::Decade => DECADE_CELL_WIDTH,
        View::Century => CENTURY_CELL_WIDTH,
    }
}

/// Pad `text` to `width` columns, centered. Wider text is returned as is.
fn center(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Render the calendar into `area`.
pub fn render_calendar(frame: &mut Frame, area: Rect, widget: &CalendarWidget) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(widget.styles.border)
        .title(" calnav ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let footer_height = if widget.show_footer { FOOTER_HEIGHT } else { 0 };
    let [header_area, body_area, footer_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer_height),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(header_line(widget)).alignment(Alignment::Center),
        header_area,
    );

    let grid = build_grid(widget.state, widget.controller.range(), widget.today);
    frame.render_widget(
        Paragraph::new(body_lines(widget, &grid)).alignment(Alignment::Center),
        body_area,
    );

    if widget.show_footer {
        let style = if widget.controller.today_in_range(widget.state, widget.today) {
            widget.styles.footer
        } else {
            widget.styles.disabled
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(footer_label(widget.today), style)))
                .alignment(Alignment::Center),
            footer_area,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            status_text(widget.state),
            widget.styles.status,
        ))),
        status_area,
    );
}

/// `‹  June 2024  ›` with unavailable controls dimmed.
fn header_line(widget: &CalendarWidget) -> Line<'static> {
    let styles = widget.styles;
    let controller = widget.controller;
    let state = widget.state;

    let enabled = |available: bool, style: Style| if available { style } else { styles.disabled };

    Line::from(vec![
        Span::styled(
            "‹",
            enabled(controller.can_move(state, Direction::Left), styles.header),
        ),
        Span::raw("  "),
        Span::styled(
            header_label(state.view, state.current_date),
            enabled(controller.can_drill_up(state), styles.header),
        ),
        Span::raw("  "),
        Span::styled(
            "›",
            enabled(controller.can_move(state, Direction::Right), styles.header),
        ),
    ])
}

fn body_lines(widget: &CalendarWidget, grid: &Grid) -> Vec<Line<'static>> {
    let width = cell_width(grid.view);
    let rtl = widget.controller.rtl();
    let mut lines = Vec::with_capacity(grid.rows.len() + 1);

    if grid.view == View::Month {
        let mut captions: Vec<Span<'static>> = WEEKDAYS
            .iter()
            .map(|name| Span::styled(center(name, width), widget.styles.weekday))
            .collect();
        if rtl {
            captions.reverse();
        }
        lines.push(Line::from(captions));
    }

    for row in &grid.rows {
        let mut spans: Vec<Span<'static>> = row
            .iter()
            .map(|cell| {
                Span::styled(
                    center(&cell_label(grid.view, cell.date), width),
                    widget.styles.cell_style(cell),
                )
            })
            .collect();
        if rtl {
            spans.reverse();
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn status_text(state: &NavigationState) -> String {
    let value = state
        .value
        .map_or_else(|| "none".to_string(), |value| value.to_string());
    format!(
        " {} · slide {} · value {} · ? help",
        state.view, state.slide, value
    )
}
