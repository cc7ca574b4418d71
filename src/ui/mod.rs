//! UI module for rendering the TUI

mod components;
mod contact;
mod fx;
mod home;
mod layout;
mod theme;

pub use layout::NAV_ROW;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let (nav_area, content_area) = layout::create_layout(area);

    layout::draw_nav_bar(frame, nav_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, content_area, app),
        View::Contact => contact::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Modal notice overlay sits on top of everything
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
