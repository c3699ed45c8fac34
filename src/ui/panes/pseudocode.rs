//! Pseudocode pane with current line indicator
//!
//! Line numbers are 1-based to match the step data. The active line is kept
//! inside the visible window when the listing is taller than the pane.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the pseudocode pane
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    active_line: Option<usize>,
) {
    let block = Block::default()
        .title(" Pseudocode ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    let offset = scroll_offset(lines.len(), visible_height, active_line);

    let visible_lines: Vec<Line> = pseudocode_lines(lines, active_line)
        .into_iter()
        .skip(offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

/// Keep the active line roughly centered, clamped to the listing
pub(crate) fn scroll_offset(total: usize, visible: usize, active_line: Option<usize>) -> usize {
    match active_line {
        Some(line) if total > visible && line > 0 => {
            let target = (line - 1).saturating_sub(visible / 2);
            target.min(total - visible)
        }
        _ => 0,
    }
}

pub(crate) fn pseudocode_lines(lines: &[String], active_line: Option<usize>) -> Vec<Line<'static>> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let line_num = idx + 1;
            let is_current = active_line == Some(line_num);

            if is_current {
                Line::from(vec![
                    Span::styled(
                        format!("{:>3} ▶ ", line_num),
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        text.clone(),
                        Style::default()
                            .fg(DEFAULT_THEME.active)
                            .bg(DEFAULT_THEME.current_line_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>3}   ", line_num),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ),
                    Span::styled(text.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                ])
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_the_active_line() {
        let listing = vec!["for i".to_string(), "swap".to_string()];
        let lines = pseudocode_lines(&listing, Some(2));

        assert_eq!(lines[0].spans[0].content, "  1   ");
        assert_eq!(lines[1].spans[0].content, "  2 ▶ ");
    }

    #[test]
    fn absent_line_marks_nothing() {
        let listing = vec!["return a".to_string()];
        let lines = pseudocode_lines(&listing, None);
        assert_eq!(lines[0].spans[0].content, "  1   ");
    }

    #[test]
    fn scroll_keeps_active_line_visible() {
        assert_eq!(scroll_offset(5, 10, Some(5)), 0);
        assert_eq!(scroll_offset(20, 4, Some(1)), 0);
        assert_eq!(scroll_offset(20, 4, Some(10)), 7);
        assert_eq!(scroll_offset(20, 4, Some(20)), 16);
    }
}
