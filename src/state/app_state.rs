//! Application state definitions

use std::collections::VecDeque;
use std::time::Instant;

use super::contact::ContactState;
use super::effects::{EffectsState, HomeSection};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Portrait, intro, and bio with the ambient animations
    #[default]
    Home,
    /// The contact form
    Contact,
}

/// Notice dialog category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A modal notice: title, body, optional highlighted contact line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
    /// Extra highlighted line, used for the fallback contact address
    pub contact_line: Option<String>,
}

impl Notice {
    pub fn success(title: &str, body: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            body: body.to_string(),
            contact_line: None,
        }
    }

    pub fn error(title: &str, body: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            body: body.to_string(),
            contact_line: None,
        }
    }

    pub fn with_contact_line(mut self, line: String) -> Self {
        self.contact_line = Some(line);
        self
    }
}

/// Screen position of one rendered redacted run, for hover hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedactedSpan {
    pub row: u16,
    pub col_start: u16,
    pub col_end: u16,
    /// Stable index of the run in profile order
    pub index: usize,
}

impl RedactedSpan {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.row && column >= self.col_start && column < self.col_end
    }
}

/// Application state shared between the event handlers and the renderer
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Contact form
    pub contact: ContactState,

    // Home view animations
    pub effects: EffectsState,

    // Modal notices, shown front first
    pub notices: VecDeque<Notice>,

    // Home view scroll state
    pub home_scroll: u16,
    /// Furthest the Home view can scroll; recorded by the renderer
    pub home_max_scroll: u16,

    // Hit targets recorded by the renderer each frame
    pub nav_segments: Vec<(u16, u16, View)>,
    pub redacted_spans: Vec<RedactedSpan>,
    /// Absolute row range (start, end) of each contact field block
    pub contact_field_rows: Vec<(u16, u16, usize)>,
    /// Absolute bounds of the submit button (col_start, col_end, row_start, row_end)
    pub submit_button_bounds: Option<(u16, u16, u16, u16)>,

    // Visibility observed by the renderer, consumed by the frame tick
    pub visible_sections: Vec<HomeSection>,
    pub portrait_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            contact: ContactState::new(),
            effects: EffectsState::new(Instant::now()),
            notices: VecDeque::new(),
            home_scroll: 0,
            home_max_scroll: 0,
            nav_segments: Vec::new(),
            redacted_spans: Vec::new(),
            contact_field_rows: Vec::new(),
            submit_button_bounds: None,
            visible_sections: Vec::new(),
            portrait_visible: false,
        }
    }
}

impl AppState {
    /// Queue a modal notice for display
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    /// Scroll down, clamped to the rendered content height
    pub fn scroll_down(&mut self) {
        self.home_scroll = self
            .home_scroll
            .saturating_add(1)
            .min(self.home_max_scroll);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.home_scroll = self.home_scroll.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.home_scroll = self
            .home_scroll
            .saturating_add(10)
            .min(self.home_max_scroll);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.home_scroll = self.home_scroll.saturating_sub(10);
    }

    /// Redacted run under the given screen position
    pub fn redacted_span_at(&self, column: u16, row: u16) -> Option<usize> {
        self.redacted_spans
            .iter()
            .find(|span| span.contains(column, row))
            .map(|span| span.index)
    }

    /// Contact field block spanning the given screen row
    pub fn contact_field_at(&self, row: u16) -> Option<usize> {
        self.contact_field_rows
            .iter()
            .find(|(start, end, _)| row >= *start && row < *end)
            .map(|(_, _, index)| *index)
    }

    /// Whether the given screen position lands on the submit button
    pub fn submit_button_hit(&self, column: u16, row: u16) -> bool {
        self.submit_button_bounds
            .map(|(c0, c1, r0, r1)| column >= c0 && column < c1 && row >= r0 && row < r1)
            .unwrap_or(false)
    }
}
