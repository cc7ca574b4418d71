//! Home view: portrait, name, intro, and bio

use crate::app::App;
use crate::state::{parse_segments, HomeSection, RedactedSpan, Segment};
use crate::ui::{fx, theme};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Widest the text column gets on a large terminal
const MAX_CONTENT_WIDTH: u16 = 64;

/// The page as one column of rows, built fresh each frame
struct Page {
    rows: Vec<Line<'static>>,
    /// Section owning each row, for visibility tracking
    sections: Vec<Option<HomeSection>>,
    /// Redacted runs: (row, col_start, col_end, run index), columns
    /// relative to the content column
    redacted: Vec<(usize, u16, u16, usize)>,
    /// Row range of the portrait block
    portrait_rows: (usize, usize),
}

/// Draw the Home view and record hit targets and visibility for this frame
pub fn draw(frame: &mut Frame, area: Rect, app: &mut App) {
    app.state.redacted_spans.clear();
    app.state.visible_sections.clear();
    app.state.portrait_visible = false;

    if area.width == 0 || area.height == 0 {
        return;
    }

    let content_width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH).max(1);
    let content_x = area.x + area.width.saturating_sub(content_width) / 2;

    let page = build_page(app, content_width, app.frame_now);

    // Clamp scroll against the page height
    let viewport = area.height as usize;
    app.state.home_max_scroll = page.rows.len().saturating_sub(viewport) as u16;
    app.state.home_scroll = app.state.home_scroll.min(app.state.home_max_scroll);
    let scroll = app.state.home_scroll as usize;
    let window_end = (scroll + viewport).min(page.rows.len());

    // Record which sections and whether the portrait are on screen
    for row_idx in scroll..window_end {
        if let Some(section) = page.sections[row_idx] {
            if !app.state.visible_sections.contains(&section) {
                app.state.visible_sections.push(section);
            }
        }
    }
    let (portrait_start, portrait_end) = page.portrait_rows;
    app.state.portrait_visible = portrait_start < window_end && portrait_end > scroll;

    // Record redacted run positions in screen coordinates
    for &(row_idx, col_start, col_end, index) in &page.redacted {
        if row_idx < scroll || row_idx >= window_end {
            continue;
        }
        app.state.redacted_spans.push(RedactedSpan {
            row: area.y + (row_idx - scroll) as u16,
            col_start: content_x + col_start,
            col_end: content_x + col_end,
            index,
        });
    }

    let visible: Vec<Line> = page
        .rows
        .into_iter()
        .skip(scroll)
        .take(viewport)
        .collect();

    let content_area = Rect {
        x: content_x,
        y: area.y,
        width: content_width,
        height: area.height,
    };
    frame.render_widget(Paragraph::new(visible), content_area);
}

fn build_page(app: &App, content_width: u16, now: Instant) -> Page {
    let profile = &app.config.profile;
    let effects = &app.state.effects;

    let mut rows: Vec<Line<'static>> = Vec::new();
    let mut sections: Vec<Option<HomeSection>> = Vec::new();
    let mut redacted: Vec<(usize, u16, u16, usize)> = Vec::new();

    rows.push(Line::from(""));
    sections.push(None);

    // Portrait, faded in once its load fade has started
    let portrait_alpha = effects.portrait_alpha(now);
    let portrait_start = rows.len();
    for art_line in &profile.portrait {
        rows.push(centered(
            art_line.clone(),
            content_width,
            Style::default().fg(fx::dim(theme::ACCENT, portrait_alpha)),
        ));
        sections.push(None);
    }
    let portrait_rows = (portrait_start, rows.len());

    rows.push(Line::from(""));
    sections.push(None);
    rows.push(centered(
        profile.name.clone(),
        content_width,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    sections.push(None);
    rows.push(centered(
        profile.tagline.clone(),
        content_width,
        Style::default()
            .fg(theme::MUTED)
            .add_modifier(Modifier::ITALIC),
    ));
    sections.push(None);
    rows.push(Line::from(""));
    sections.push(None);

    // Intro and bio fade in and rise the first time they scroll into view.
    // Run indices are assigned in document order so they stay stable.
    let mut run_index = 0usize;
    for (section, text_lines) in [
        (HomeSection::Intro, &profile.intro),
        (HomeSection::Bio, &profile.bio),
    ] {
        let alpha = effects.section_alpha(section, now);
        let rise = effects.section_rise(section, now) as usize;

        let mut built: Vec<(Line<'static>, Vec<(u16, u16, usize)>)> = Vec::new();
        for text in text_lines {
            let mut spans = Vec::new();
            let mut col = 0u16;
            let mut runs = Vec::new();
            for segment in parse_segments(text) {
                let width = segment.display_width() as u16;
                match segment {
                    Segment::Plain(plain) => {
                        spans.push(Span::styled(
                            plain,
                            Style::default().fg(fx::dim(Color::Gray, alpha)),
                        ));
                    }
                    Segment::Redacted(_) => {
                        let flicker = effects.flicker_alpha(run_index, now);
                        spans.push(Span::styled(
                            "█".repeat(width as usize),
                            Style::default().fg(fx::dim(theme::ACCENT, alpha * flicker)),
                        ));
                        runs.push((col, col + width, run_index));
                        run_index += 1;
                    }
                }
                col += width;
            }
            built.push((Line::from(spans), runs));
        }

        // While rising, the section sits `rise` rows low; blank rows fill
        // the top and the tail is clipped so the page height stays put
        let keep = built.len().saturating_sub(rise);
        for _ in 0..rise {
            rows.push(Line::from(""));
            sections.push(Some(section));
        }
        for (line, runs) in built.into_iter().take(keep) {
            let row_idx = rows.len();
            for (col_start, col_end, index) in runs {
                redacted.push((row_idx, col_start, col_end, index));
            }
            rows.push(line);
            sections.push(Some(section));
        }

        if section == HomeSection::Intro {
            rows.push(Line::from(""));
            sections.push(None);
        }
    }

    Page {
        rows,
        sections,
        redacted,
        portrait_rows,
    }
}

/// A single row centered within the content column
fn centered(text: String, content_width: u16, style: Style) -> Line<'static> {
    let width = text.chars().count() as u16;
    let pad = (content_width.saturating_sub(width) / 2) as usize;
    Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)])
}
