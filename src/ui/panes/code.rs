//! Code sample pane with language tabs and syntax highlighting
//!
//! The highlighter is a character-by-character tokenizer that colors
//! comments, strings, numbers, keywords, type names and function calls. It
//! knows the keywords of the languages shipped in the built-in library and
//! falls back to plain identifiers for anything else.

use crate::catalog::CodeSample;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the code pane; `selected` is the active tab
pub fn render_code_pane(frame: &mut Frame, area: Rect, samples: &[CodeSample], selected: usize) {
    let block = Block::default()
        .title(" Code ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(active) = samples.get(selected).or_else(|| samples.first()) else {
        let empty = Paragraph::new("(no code samples)").style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(empty, inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let tabs = Tabs::new(
        samples
            .iter()
            .map(|sample| Line::from(sample.language.clone()))
            .collect::<Vec<_>>(),
    )
    .select(selected.min(samples.len() - 1))
    .style(Style::default().fg(DEFAULT_THEME.comment))
    .highlight_style(
        Style::default()
            .fg(DEFAULT_THEME.active)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )
    .divider("│");
    frame.render_widget(tabs, rows[0]);

    let lines: Vec<Line> = active.snippet.lines().map(highlight_code_line).collect();
    frame.render_widget(Paragraph::new(lines), rows[1]);
}

/// Simple syntax highlighting for C-family code
pub(crate) fn highlight_code_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    // Simple tokenizer
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle comments
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            flush_word(&mut spans, &mut current_word, false);
            spans.push(Span::styled(
                chars[i..].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        // A quote that opens no char literal is a lifetime or label
        if c == '\'' {
            if let Some(end) = char_literal_end(&chars, i) {
                flush_word(&mut spans, &mut current_word, false);
                spans.push(Span::styled(
                    chars[i..end].iter().collect::<String>(),
                    Style::default().fg(DEFAULT_THEME.string),
                ));
                i = end;
                continue;
            }
        }

        // Handle strings
        if c == '"' || c == '`' {
            flush_word(&mut spans, &mut current_word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            let end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut current_word, c == '(');
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);
    Line::from(spans)
}

/// End (exclusive) of a char literal such as `'x'` or `'\n'` opening at `start`
fn char_literal_end(chars: &[char], start: usize) -> Option<usize> {
    let close = match chars.get(start + 1) {
        Some('\\') => start + 3,
        Some(_) => start + 2,
        None => return None,
    };
    (chars.get(close) == Some(&'\'')).then_some(close + 1)
}

fn flush_word(spans: &mut Vec<Span<'static>>, word: &mut String, is_call: bool) {
    if word.is_empty() {
        return;
    }
    let style = word_style(word, is_call);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "fn" | "let" | "mut" | "if" | "else" | "for" | "while" | "in" | "return" | "match"
        | "impl" | "struct" | "use" | "const" | "function" | "class" | "private" | "type"
        | "new" | "of" | "break" | "continue" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "i64" | "usize" | "bool" | "number" | "string" | "void" | "Vec" | "VecDeque"
        | "Option" | "Box" | "Self" | "T" | "str" => Style::default().fg(DEFAULT_THEME.type_name),
        "true" | "false" | "null" | "None" | "Some" | "undefined" => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if word.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}
