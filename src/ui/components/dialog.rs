//! Modal notice dialog

use crate::state::{Notice, NoticeKind};
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest the dialog gets, borders included
const MAX_WIDTH: u16 = 60;
/// Extra columns between the text and the borders
const H_PADDING: u16 = 4;

/// Render the front notice as a centered overlay on top of the
/// current view. The caller decides which notice is front.
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let screen = frame.area();
    let chrome = match notice.kind {
        NoticeKind::Success => theme::SUCCESS,
        NoticeKind::Error => theme::DANGER,
    };

    let wrap_width = usize::from(MAX_WIDTH.saturating_sub(2 + H_PADDING));
    let body = wrap_text(&notice.body, wrap_width);

    let mut lines: Vec<Line> = Vec::with_capacity(body.len() + 6);
    lines.push(Line::from(Span::styled(
        notice.title.as_str(),
        Style::default().fg(chrome).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    for text in body {
        lines.push(Line::from(text));
    }
    if let Some(contact) = &notice.contact_line {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            contact.as_str(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(dismiss_hint());

    let longest = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (longest + 2 + H_PADDING).min(MAX_WIDTH).min(screen.width);
    let height = (lines.len() as u16 + 2).min(screen.height);
    let dialog = Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(chrome))
                    .style(Style::default().bg(Color::Black)),
            )
            .style(Style::default().bg(Color::Black)),
        dialog,
    );
}

fn dismiss_hint() -> Line<'static> {
    let key = Style::default()
        .fg(theme::ACCENT)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ])
}

/// Greedy word wrap. Explicit newlines survive as line breaks so a
/// notice body can carry its own paragraphs.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut used = 0usize;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if used > 0 && used + 1 + word_width > width {
                out.push(std::mem::take(&mut line));
                used = 0;
            }
            if used > 0 {
                line.push(' ');
                used += 1;
            }
            line.push_str(word);
            used += word_width;
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 12, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_wrap_never_splits_words() {
        let lines = wrap_text("unbreakable short", 6);
        assert_eq!(lines[0], "unbreakable");
        assert_eq!(lines[1], "short");
    }

    #[test]
    fn test_wrap_keeps_explicit_breaks() {
        assert_eq!(
            wrap_text("first line\n\nsecond line", 40),
            vec!["first line", "", "second line"]
        );
    }

    #[test]
    fn test_wrap_empty_input_is_one_blank_line() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }
}
