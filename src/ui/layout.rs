//! Layout components (notice bar, status bar)

use crate::app::App;
use crate::state::{NoticeKind, SubmissionState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into notice bar, form content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Notice bar
            Constraint::Min(0),    // Form content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the transient top-level notice, if one is showing
pub fn draw_notice(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.state.notice else {
        return;
    };

    let style = match notice.kind {
        NoticeKind::Error => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        NoticeKind::Success => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };

    let paragraph = Paragraph::new(notice.message.clone())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Draw the status bar with key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hint_style = Style::default().fg(Color::DarkGray);
    let key_style = Style::default().fg(Color::Cyan);

    let line = if app.state.submission == SubmissionState::Submitting {
        Line::from(Span::styled("Sending your message…", hint_style))
    } else {
        Line::from(vec![
            Span::styled("Tab", key_style),
            Span::styled(" next field  ", hint_style),
            Span::styled("Enter", key_style),
            Span::styled("/", hint_style),
            Span::styled("Ctrl+S", key_style),
            Span::styled(" send  ", hint_style),
            Span::styled("Esc", key_style),
            Span::styled(" quit", hint_style),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
