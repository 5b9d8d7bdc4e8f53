//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (notice_area, form_area, status_area) = layout::create_layout(area);

    layout::draw_notice(frame, notice_area, app);
    forms::draw(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
