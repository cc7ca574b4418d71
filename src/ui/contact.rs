//! Contact view: the three-field form, submit button, and status line

use crate::app::App;
use crate::state::{ContactField, FieldKind, STATUS_SENT};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use crate::ui::theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Bordered single-line field height
const FIELD_HEIGHT: u16 = 3;
/// Bordered message box height
const MESSAGE_HEIGHT: u16 = 6;
/// Widest the form column gets
const MAX_FORM_WIDTH: u16 = 48;
const BUTTON_WIDTH: u16 = 12;

/// Draw the Contact view and record the form's hit targets
pub fn draw(frame: &mut Frame, area: Rect, app: &mut App) {
    app.state.contact_field_rows.clear();
    app.state.submit_button_bounds = None;

    if area.width == 0 || area.height == 0 {
        return;
    }

    let form_width = area.width.saturating_sub(4).min(MAX_FORM_WIDTH).max(1);
    let form_x = area.x + area.width.saturating_sub(form_width) / 2;
    let form_area = Rect {
        x: form_x,
        y: area.y,
        width: form_width,
        height: area.height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Heading
            Constraint::Length(FIELD_HEIGHT),   // Name
            Constraint::Length(FIELD_HEIGHT),   // Email
            Constraint::Length(MESSAGE_HEIGHT), // Message
            Constraint::Length(BUTTON_HEIGHT),  // Submit button
            Constraint::Length(1),              // Status line
            Constraint::Min(0),
        ])
        .split(form_area);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Get in touch",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[0]);

    let active_index = app.state.contact.active_field_index;
    let form_touched = app.state.contact.fields.iter().any(|f| f.touched);
    for (idx, field) in app.state.contact.fields.iter().enumerate() {
        let chunk = chunks[idx + 1];
        if chunk.height == 0 {
            continue;
        }
        draw_field(frame, chunk, field, idx == active_index, form_touched);
        app.state
            .contact_field_rows
            .push((chunk.y, chunk.y + chunk.height, idx));
    }

    // Submit button, flush left like the form fields
    let button_height = chunks[4].height.min(BUTTON_HEIGHT);
    if button_height > 0 {
        let button_area = Rect {
            x: form_area.x,
            y: chunks[4].y,
            width: BUTTON_WIDTH.min(form_width),
            height: button_height,
        };
        render_submit_button(frame, button_area, app.state.contact.submit_control());
        app.state.submit_button_bounds = Some((
            button_area.x,
            button_area.x + button_area.width,
            button_area.y,
            button_area.y + button_area.height,
        ));
    }

    // Status element; empty means hidden
    if !app.state.contact.status.is_empty() && chunks[5].height > 0 {
        let color = if app.state.contact.status == STATUS_SENT {
            theme::SUCCESS
        } else {
            theme::DANGER
        };
        let status = Paragraph::new(Line::from(Span::styled(
            app.state.contact.status.clone(),
            Style::default().fg(color).add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(status, chunks[5]);
    }
}

/// Draw one form field as a bordered block with the label as its title
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &ContactField,
    is_active: bool,
    form_touched: bool,
) {
    let style = if is_active {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::MUTED)
    };

    // The email border reflects the live verdict once typing begins anywhere
    // in the form, not just in the email field itself
    let border_style = if field.kind == FieldKind::Email && form_touched {
        if field.valid {
            Style::default().fg(theme::SUCCESS)
        } else {
            Style::default().fg(theme::DANGER)
        }
    } else if is_active {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::MUTED)
    };

    let display_str = if field.value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        field.value.clone()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(theme::ACCENT)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(theme::ACCENT),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(theme::ACCENT)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
