//! Layout components (nav bar, status bar)

use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::{SubmitOutcome, View};
use crate::ui::theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen row of the nav bar text line, inside its borders
pub const NAV_ROW: u16 = 1;

/// Nav tabs in display order
const NAV_TABS: [(&str, View); 2] = [("Home", View::Home), ("Contact", View::Contact)];

/// Columns between adjacent tabs
const TAB_GAP: usize = 2;

/// Split the screen into nav bar and content, reserving the bottom status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav bar (bordered)
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the bordered nav bar: site name on the left, view tabs on the right
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let name = app.config.profile.name.clone();

    let tabs_width: usize = NAV_TABS.iter().map(|(label, _)| label.len()).sum::<usize>()
        + (NAV_TABS.len() - 1) * TAB_GAP;

    let mut spans = vec![Span::styled(
        format!(" {name}"),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    // Right-align the tabs inside the borders, one column of margin
    let inner_width = area.width.saturating_sub(2) as usize;
    let used = 1 + name.chars().count();
    let gap = inner_width.saturating_sub(used + tabs_width + 1);
    spans.push(Span::raw(" ".repeat(gap)));

    // First text column is area.x + 1 (left border)
    let mut current_col = area.x + 1 + (used + gap) as u16;
    let mut segments = Vec::new();

    for (i, (label, target_view)) in NAV_TABS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(TAB_GAP)));
            current_col += TAB_GAP as u16;
        }

        let start_col = current_col;
        let is_current = app.state.current_view == *target_view;
        let style = if is_current {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::ACCENT)
        };

        spans.push(Span::styled(*label, style));
        current_col += label.len() as u16;

        // Store tab bounds for click detection (only the inactive one)
        if !is_current {
            segments.push((start_col, current_col, *target_view));
        }
    }

    // Store segments for mouse handling
    app.state.nav_segments = segments;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::MUTED));
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Activity dot while a submission is in flight
    if app.state.contact.outcome == SubmitOutcome::InFlight {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled("sending", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" | "));
    } else {
        spans.push(Span::raw(" "));
    }

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right, truncated on terminals narrower than the hint
    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.width - quit_width,
        y: area.height.saturating_sub(1),
        width: quit_width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Home => "1/2:switch  j/k:scroll  q:quit".to_string(),
        View::Contact => format!("Tab:next field  {SEND_SHORTCUT}:send  Ctrl+U:clear  Esc:home"),
    }
}
