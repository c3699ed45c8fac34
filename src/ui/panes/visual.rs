//! Visualizer pane
//!
//! Draws the current step: position, title, note and description on top,
//! then the visual state.
//!
//! # Layout
//!
//! Arrays are drawn as a row of boxed cells with pointer labels above and
//! indices below:
//!
//! ```text
//!    i,j
//!   ┌───┐ ┌───┐ ┌───┐
//!   │ 5 │ │ 2 │ │ 4 │
//!   └───┘ └───┘ └───┘
//!     0     1     2
//! ```
//!
//! Binary-search bounds reuse the array drawing with `low`/`mid`/`high` as
//! labels and dim the cells outside the window. Stacks and queues are boxed
//! rows; linked lists are drawn inline and end in `null`.

use crate::player::PlaybackView;
use crate::step::{Bounds, Pointer, VisualState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the visualizer pane
pub fn render_visual_pane(frame: &mut Frame, area: Rect, view: &PlaybackView<'_>) {
    let block = Block::default()
        .title(" Visualizer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = heading_lines(view);
    lines.push(Line::default());
    lines.extend(visual_lines(&view.step.visual));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn heading_lines(view: &PlaybackView<'_>) -> Vec<Line<'static>> {
    let step = view.step;
    let mut title = vec![
        Span::styled(
            view.position_label().to_uppercase(),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::raw("  "),
    ];
    if let Some(text) = &step.title {
        title.push(Span::styled(
            text.clone(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(note) = &step.note {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            format!(" {} ", note),
            Style::default()
                .fg(DEFAULT_THEME.note)
                .add_modifier(Modifier::REVERSED),
        ));
    }

    let mut lines = vec![Line::from(title)];
    if let Some(description) = &step.description {
        lines.push(Line::styled(
            description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    lines
}

/// Lines for one visual state
pub(crate) fn visual_lines(visual: &VisualState) -> Vec<Line<'static>> {
    match visual {
        VisualState::Array {
            values,
            highlight,
            pointers,
        } => array_lines(values, highlight, pointers, None),
        VisualState::Bounds {
            values,
            highlight,
            bounds,
        } => {
            let labels = bound_pointers(bounds);
            let mut lines = array_lines(values, highlight, &labels, Some(bounds));
            lines.push(Line::default());
            lines.push(bounds_chips(bounds));
            lines
        }
        VisualState::Stack { items, highlight } => {
            collection_lines("Stack (top at right)", items, highlight)
        }
        VisualState::Queue { items, highlight } => {
            collection_lines("Queue (head → tail)", items, highlight)
        }
        VisualState::List { nodes, highlight } => list_lines(nodes, highlight),
        VisualState::Empty => vec![Line::styled(
            "Visualization placeholder",
            Style::default().fg(DEFAULT_THEME.comment),
        )],
    }
}

fn cell_style(active: bool, dimmed: bool) -> Style {
    if active {
        Style::default()
            .fg(DEFAULT_THEME.active)
            .add_modifier(Modifier::BOLD)
    } else if dimmed {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

fn centered(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// Top, middle and bottom rows of a row of boxes
fn boxed_row(labels: &[String], styles: &[Style], inner: usize) -> [Line<'static>; 3] {
    let mut top = Vec::new();
    let mut mid = Vec::new();
    let mut bottom = Vec::new();
    for (label, style) in labels.iter().zip(styles) {
        let rule = "─".repeat(inner);
        top.push(Span::styled(format!("┌{}┐ ", rule), *style));
        mid.push(Span::styled("│", *style));
        mid.push(Span::styled(centered(label, inner), *style));
        mid.push(Span::styled("│ ", *style));
        bottom.push(Span::styled(format!("└{}┘ ", rule), *style));
    }
    [Line::from(top), Line::from(mid), Line::from(bottom)]
}

fn array_lines(
    values: &[i64],
    highlight: &[usize],
    pointers: &[Pointer],
    bounds: Option<&Bounds>,
) -> Vec<Line<'static>> {
    if values.is_empty() {
        return vec![Line::styled(
            "[] (empty array)",
            Style::default().fg(DEFAULT_THEME.comment),
        )];
    }

    let labels: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    let pointer_labels: Vec<String> = (0..values.len())
        .map(|idx| {
            pointers
                .iter()
                .filter(|p| p.cell(values.len()) == Some(idx))
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    let widest = labels
        .iter()
        .chain(pointer_labels.iter())
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(1);
    let inner = widest + 2;

    let styles: Vec<Style> = (0..values.len())
        .map(|idx| {
            let outside = bounds.is_some_and(|b| idx < b.low || idx > b.high);
            cell_style(highlight.contains(&idx), outside)
        })
        .collect();

    let pointer_row = Line::from(
        pointer_labels
            .iter()
            .map(|label| {
                Span::styled(
                    format!("{} ", centered(label, inner + 2)),
                    Style::default()
                        .fg(DEFAULT_THEME.pointer)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    );
    let index_row = Line::from(
        (0..values.len())
            .map(|idx| {
                Span::styled(
                    format!("{} ", centered(&idx.to_string(), inner + 2)),
                    Style::default().fg(DEFAULT_THEME.comment),
                )
            })
            .collect::<Vec<_>>(),
    );

    let mut lines = vec![pointer_row];
    lines.extend(boxed_row(&labels, &styles, inner));
    lines.push(index_row);

    for pointer in pointers {
        if pointer.cell(values.len()).is_none() {
            lines.push(Line::styled(
                format!("{} = {} (off the array)", pointer.name, pointer.position),
                Style::default().fg(DEFAULT_THEME.pointer),
            ));
        }
    }
    lines
}

fn bound_pointers(bounds: &Bounds) -> Vec<Pointer> {
    let mut labels = vec![Pointer::new("low", bounds.low as isize)];
    if let Some(mid) = bounds.mid {
        labels.push(Pointer::new("mid", mid as isize));
    }
    labels.push(Pointer::new("high", bounds.high as isize));
    labels
}

fn bounds_chips(bounds: &Bounds) -> Line<'static> {
    let chip = Style::default().fg(DEFAULT_THEME.fg).bg(DEFAULT_THEME.current_line_bg);
    let mut spans = vec![
        Span::styled(format!(" low = {} ", bounds.low), chip),
        Span::raw(" "),
        Span::styled(format!(" high = {} ", bounds.high), chip),
    ];
    if let Some(mid) = bounds.mid {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" mid = {} ", mid),
            chip.fg(DEFAULT_THEME.active).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn collection_lines(caption: &str, items: &[String], highlight: &[usize]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        caption.to_uppercase(),
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    if items.is_empty() {
        lines.push(Line::styled(
            "empty",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        return lines;
    }

    let inner = items
        .iter()
        .map(|item| item.chars().count())
        .max()
        .unwrap_or(1)
        + 2;
    let styles: Vec<Style> = (0..items.len())
        .map(|idx| cell_style(highlight.contains(&idx), false))
        .collect();
    lines.extend(boxed_row(items, &styles, inner));
    lines
}

fn list_lines(nodes: &[String], highlight: &[usize]) -> Vec<Line<'static>> {
    let arrow = Style::default().fg(DEFAULT_THEME.comment);
    let mut spans = Vec::new();
    for (idx, node) in nodes.iter().enumerate() {
        spans.push(Span::styled(
            format!("[ {} ]", node),
            cell_style(highlight.contains(&idx), false),
        ));
        spans.push(Span::styled(" → ", arrow));
    }
    spans.push(Span::styled("null", arrow));

    vec![
        Line::styled(
            "LINKED LIST",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Line::from(spans),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn array_has_pointer_box_and_index_rows() {
        let visual = VisualState::array_with_pointers(&[5, 2], &[0], &[("i", 0), ("j", 0)]);
        let rows = text(&visual_lines(&visual));

        assert_eq!(rows.len(), 5);
        assert!(rows[0].contains("i,j"));
        assert!(rows[2].contains("│  5  │"));
        assert!(rows[4].contains('1'));
    }

    #[test]
    fn pointer_off_the_array_is_listed() {
        let visual = VisualState::array_with_pointers(&[4, 4], &[], &[("j", -1)]);
        let rows = text(&visual_lines(&visual));
        assert_eq!(rows.last().map(String::as_str), Some("j = -1 (off the array)"));
    }

    #[test]
    fn bounds_show_window_labels_and_chips() {
        let visual = VisualState::bounds(
            &[1, 3, 5, 7],
            &[],
            Bounds {
                low: 1,
                high: 3,
                mid: Some(2),
            },
        );
        let rows = text(&visual_lines(&visual));
        assert!(rows[0].contains("low"));
        assert!(rows[0].contains("mid"));
        assert!(rows[0].contains("high"));
        assert_eq!(
            rows.last().map(String::as_str),
            Some(" low = 1   high = 3   mid = 2 ")
        );
    }

    #[test]
    fn empty_stack_says_empty() {
        let rows = text(&visual_lines(&VisualState::stack(&[])));
        assert_eq!(rows, ["STACK (TOP AT RIGHT)", "empty"]);
    }

    #[test]
    fn list_ends_in_null() {
        let rows = text(&visual_lines(&VisualState::list(&["A", "B"], &[0])));
        assert_eq!(rows[1], "[ A ] → [ B ] → null");
    }

    #[test]
    fn empty_state_shows_placeholder() {
        let rows = text(&visual_lines(&VisualState::Empty));
        assert_eq!(rows, ["Visualization placeholder"]);
    }
}
