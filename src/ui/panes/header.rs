//! Algorithm header: name, category, difficulty, tags and complexity

use crate::catalog::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height the header needs, borders included
pub const HEADER_HEIGHT: u16 = 5;

pub fn render_header_pane(frame: &mut Frame, area: Rect, algorithm: &Algorithm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    frame.render_widget(Paragraph::new(header_lines(algorithm)).block(block), area);
}

pub(crate) fn header_lines(algorithm: &Algorithm) -> Vec<Line<'static>> {
    let dim = Style::default().fg(DEFAULT_THEME.comment);

    let mut title = vec![
        Span::styled(
            format!(" {} ", algorithm.name),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} · {} ",
                algorithm.category.label(),
                algorithm.difficulty.label()
            ),
            dim,
        ),
    ];
    for tag in &algorithm.tags {
        title.push(Span::styled(
            format!("#{}", tag),
            Style::default().fg(DEFAULT_THEME.note),
        ));
        title.push(Span::raw(" "));
    }

    let c = &algorithm.complexity;
    let value = Style::default().fg(DEFAULT_THEME.fg);
    let complexity = Line::from(vec![
        Span::styled(" Best ", dim),
        Span::styled(c.best.clone(), value),
        Span::styled("   Average ", dim),
        Span::styled(c.average.clone(), value),
        Span::styled("   Worst ", dim),
        Span::styled(c.worst.clone(), value),
        Span::styled("   Space ", dim),
        Span::styled(c.space.clone(), value),
    ]);

    vec![
        Line::from(title),
        Line::styled(
            format!(" {}", algorithm.short_description),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        complexity,
    ]
}
