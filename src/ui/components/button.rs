//! Submit button component for the contact form

use crate::state::SubmitControl;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render the submit button. Label and styling both follow the control
/// state, so a disabled or finished button reads as such.
pub fn render_submit_button(frame: &mut Frame, area: Rect, control: SubmitControl) {
    let color = match control {
        SubmitControl::Ready => theme::ACCENT,
        SubmitControl::Done => theme::SUCCESS,
        SubmitControl::Blocked | SubmitControl::InFlight => theme::MUTED,
    };

    let text_style = match control {
        SubmitControl::Ready => Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(color),
    };

    let paragraph = Paragraph::new(format!(" {} ", control.label())).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(paragraph.block(block), area);
}
