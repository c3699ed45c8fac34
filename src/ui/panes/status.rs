//! Status bar rendering with keybindings and playback indicators

use crate::player::PlaybackView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom of the player screen.
///
/// `prompt` replaces the message while the goto-step field is open.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    view: &PlaybackView<'_>,
    message: &str,
    prompt: Option<&str>,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(left_paragraph(view, message, prompt), layout[0]);
    frame.render_widget(right_paragraph(view), layout[1]);
}

fn left_paragraph(view: &PlaybackView<'_>, message: &str, prompt: Option<&str>) -> Paragraph<'static> {
    let step_text = format!(" Step {}/{} ", view.index + 1, view.total);

    let mut left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if prompt.is_some() {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
    ];

    match prompt {
        Some(value) => {
            left_spans.push(Span::styled(
                " Go to step: ",
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.secondary),
            ));
            left_spans.push(Span::styled(
                format!("{}█", value),
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        None => left_spans.push(Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        )),
    }

    Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left)
}

fn right_paragraph(view: &PlaybackView<'_>) -> Paragraph<'static> {
    // Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(if view.is_playing { " pause " } else { " play " }, desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ? ", key_style),
        Span::styled(" help ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(
            format!(" {} ", view.speed.label()),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Show status indicators based on position and state
    let badge = if view.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if view.is_at_end() {
        Some((" END ", DEFAULT_THEME.error))
    } else if view.is_at_start() {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right)
}
