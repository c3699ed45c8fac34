//! Library pane: grouped algorithm list plus a detail panel for the selection

use crate::catalog::{Algorithm, Category};
use crate::ui::library::LibraryState;
use crate::ui::panes::pseudocode::scroll_offset;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::rc::Rc;

pub fn render_library_pane(frame: &mut Frame, area: Rect, state: &LibraryState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[0]);

    let visible = state.visible();
    let selected = visible.get(state.selected());

    let list_block = Block::default()
        .title(" Algorithms ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if state.is_filter_focused() {
            DEFAULT_THEME.border_normal
        } else {
            DEFAULT_THEME.border_focused
        }));
    let (lines, selected_row) = list_lines(&visible, state.selected());
    let visible_height = columns[0].height.saturating_sub(2).max(1) as usize;
    let offset = scroll_offset(lines.len(), visible_height, selected_row.map(|row| row + 1));
    let window: Vec<Line> = lines.into_iter().skip(offset).take(visible_height).collect();
    frame.render_widget(Paragraph::new(window).block(list_block), columns[0]);

    let detail_block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let detail = match selected {
        Some(algorithm) => detail_lines(algorithm),
        None => vec![Line::styled(
            "No algorithm matches the filter",
            Style::default().fg(DEFAULT_THEME.comment),
        )],
    };
    frame.render_widget(
        Paragraph::new(detail)
            .block(detail_block)
            .wrap(Wrap { trim: false }),
        columns[1],
    );

    frame.render_widget(filter_bar(state), rows[1]);
}

/// Category headings followed by their entries; the selection is marked `▶`.
/// Also returns the row the selection landed on.
pub(crate) fn list_lines(
    visible: &[Rc<Algorithm>],
    selected: usize,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut selected_row = None;
    for category in Category::ALL {
        let mut entries = visible
            .iter()
            .enumerate()
            .filter(|(_, algorithm)| algorithm.category == category)
            .peekable();
        if entries.peek().is_none() {
            continue;
        }

        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            category.label().to_uppercase(),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::BOLD),
        ));

        for (idx, algorithm) in entries {
            if idx == selected {
                selected_row = Some(lines.len());
                lines.push(Line::from(vec![
                    Span::styled(
                        " ▶ ",
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        algorithm.name.clone(),
                        Style::default()
                            .fg(DEFAULT_THEME.active)
                            .bg(DEFAULT_THEME.current_line_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("   "),
                    Span::styled(algorithm.name.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                ]));
            }
        }
    }
    (lines, selected_row)
}

fn detail_lines(algorithm: &Algorithm) -> Vec<Line<'static>> {
    let dim = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    vec![
        Line::styled(
            algorithm.name.clone(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!(
                "{} · {} · {} steps",
                algorithm.category.label(),
                algorithm.difficulty.label(),
                algorithm.total_steps()
            ),
            dim,
        ),
        Line::default(),
        Line::styled(algorithm.short_description.clone(), value),
        Line::default(),
        Line::from(vec![
            Span::styled("Average ", dim),
            Span::styled(algorithm.complexity.average.clone(), value),
            Span::styled("   Space ", dim),
            Span::styled(algorithm.complexity.space.clone(), value),
        ]),
        Line::styled(
            algorithm
                .tags
                .iter()
                .map(|tag| format!("#{}", tag))
                .collect::<Vec<_>>()
                .join(" "),
            Style::default().fg(DEFAULT_THEME.note),
        ),
    ]
}

fn filter_bar(state: &LibraryState) -> Paragraph<'static> {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);

    let mut spans = vec![
        Span::styled(" / ", key_style),
        Span::styled(" filter: ", desc_style),
    ];
    let cursor = if state.is_filter_focused() { "█" } else { "" };
    spans.push(Span::styled(
        format!("{}{} ", state.filter(), cursor),
        desc_style.add_modifier(Modifier::BOLD),
    ));
    spans.extend([
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" select ", desc_style),
        Span::styled(" ↵ ", key_style),
        Span::styled(" open ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ]);

    Paragraph::new(Line::from(spans)).style(Style::default().bg(DEFAULT_THEME.current_line_bg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Complexity, Difficulty};
    use crate::step::{Step, StepSequence, VisualState};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn groups_entries_under_category_headings() {
        let visible = Catalog::builtin().library_order();
        let (lines, selected_row) = list_lines(&visible, 0);
        let rows: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(rows[0], "SORTING");
        assert_eq!(rows[1], " ▶ Bubble Sort");
        assert_eq!(selected_row, Some(1));
        assert!(rows.contains(&"SEARCHING".to_string()));
        assert!(rows.contains(&"DATA STRUCTURE".to_string()));
    }

    fn many(n: usize) -> Catalog {
        let algorithms = (1..=n)
            .map(|i| Algorithm {
                slug: format!("entry-{:02}", i),
                name: format!("Entry {:02}", i),
                category: Category::Sorting,
                difficulty: Difficulty::Beginner,
                short_description: String::new(),
                tags: Vec::new(),
                complexity: Complexity::new("-", "-", "-", "-"),
                pseudocode: Vec::new(),
                code: Vec::new(),
                steps: StepSequence::starting_with(
                    Step::new(VisualState::array(&[1], &[])),
                    std::iter::empty(),
                ),
            })
            .collect();
        Catalog::new(algorithms).expect("valid catalog")
    }

    fn screen_text(state: &LibraryState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_library_pane(f, area, state);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn long_list_scrolls_to_keep_selection_visible() {
        let mut state = LibraryState::new(&many(30));
        let text = screen_text(&state);
        assert!(text.contains("▶ Entry 01"));
        assert!(!text.contains("Entry 30"));

        state.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        let text = screen_text(&state);
        assert!(text.contains("▶ Entry 30"));
        assert!(!text.contains("Entry 01"));
    }
}
