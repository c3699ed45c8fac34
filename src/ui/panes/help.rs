//! Key binding overlay for the player screen

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Space", "play / pause"),
    ("→ l", "next step (pauses)"),
    ("← h", "previous step (pauses)"),
    ("Home End", "first / last step"),
    ("g :", "go to step"),
    ("r", "reset to step 1"),
    ("+ -", "faster / slower"),
    ("1 2 3", "speed 0.5x / 1x / 2x"),
    ("Tab", "next code tab"),
    ("c", "show / hide code"),
    ("Esc b", "back to library"),
    ("q", "quit"),
];

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 46, BINDINGS.len() as u16 + 4);
    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>9}  ", keys),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        " press any key to close",
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Fixed-size rect centered in `area`, shrunk to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
