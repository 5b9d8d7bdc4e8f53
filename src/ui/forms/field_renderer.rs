//! Field rendering utilities for the contact form

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field box: label on the top border, live value inside,
/// inline error on the bottom border when the field is in the errored state.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if field.has_error() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            // Trailing newline yields no final line from `lines()`
            let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));
            if field.value.ends_with('\n') || lines.is_empty() {
                lines.push(Line::from(cursor_span));
            } else if let Some(last) = lines.last_mut() {
                last.spans.push(cursor_span);
            }
        }
        Paragraph::new(lines).wrap(Wrap { trim: false })
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.clone(), value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.id.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.block(block), area);
}
