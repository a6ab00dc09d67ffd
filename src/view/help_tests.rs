//! Tests for help overlay widget

use super::*;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn buffer_to_string(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| render_help_overlay(frame))
        .expect("draw");
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn render_help_overlay_shows_bordered_modal() {
    let text = render(80, 30);
    assert!(
        text.contains('┌') && text.contains('┐'),
        "Help overlay should render a bordered box"
    );
    assert!(text.contains("Keyboard Shortcuts"), "Title missing:\n{}", text);
}

#[test]
fn render_help_overlay_lists_every_category() {
    let text = render(80, 30);
    for category in ["Calendar", "Cells", "Buttons", "Application"] {
        assert!(
            text.contains(category),
            "Should show {} category:\n{}",
            category,
            text
        );
    }
}

#[test]
fn render_help_overlay_mentions_drill_and_today_keys() {
    let text = render(80, 30);
    assert!(text.contains("Drill up / down a view"));
    assert!(text.contains("Select today"));
}

#[test]
fn render_help_overlay_shows_dismiss_hint() {
    let text = render(80, 30);
    assert!(text.contains("Press Esc or ? to close"));
}

#[test]
fn centered_rect_is_centered() {
    let area = Rect::new(0, 0, 100, 50);
    let rect = centered_rect(70, 80, area);
    assert_eq!(rect, Rect::new(15, 5, 70, 40));
}

#[test]
fn render_help_overlay_survives_tiny_terminal() {
    let text = render(10, 4);
    assert_eq!(text.lines().count(), 4);
}
