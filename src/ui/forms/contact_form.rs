//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form: four field boxes and the submit-button row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let outer_color = if form.has_any_error() {
        Color::Red
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(outer_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Phone
            Constraint::Length(3),             // Email
            Constraint::Min(6),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit button
        ])
        .margin(1)
        .split(area);

    draw_field(frame, chunks[0], &form.name, form.active_field_index == 0);
    draw_field(frame, chunks[1], &form.phone, form.active_field_index == 1);
    draw_field(frame, chunks[2], &form.email, form.active_field_index == 2);
    draw_field(frame, chunks[3], &form.message, form.active_field_index == 3);

    draw_submit_row(frame, chunks[4], app);
}

/// Centered submit button reflecting the control's enabled flag and label
fn draw_submit_row(frame: &mut Frame, area: Rect, app: &App) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        row[1],
        app.state.submit.label,
        app.state.form.is_buttons_row_active(),
        app.state.submit.enabled,
    );
}
