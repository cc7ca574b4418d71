//! Application state and core logic

use crate::backend::{FormBackend, HttpFormBackend, SubmitError, SubmitReceipt, SubmitRequest};
use crate::config::FolioConfig;
use crate::platform::SEND_MODIFIER;
use crate::state::{
    AppState, Notice, SubmitControl, View, STATUS_INVALID_EMAIL, STATUS_REQUIRED,
};
use crate::ui::NAV_ROW;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Events resolved off the event loop and drained once per tick
#[derive(Debug)]
pub enum AppEvent {
    /// A contact form submission came back
    SubmitResolved(Result<SubmitReceipt, SubmitError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: FolioConfig,
    /// Submission backend; spawned tasks hold a clone
    backend: Arc<dyn FormBackend>,
    /// Sender handed to spawned submission tasks
    events_tx: mpsc::UnboundedSender<AppEvent>,
    /// Receiver drained by the event loop
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Clock shared by this frame's render and input handling
    pub frame_now: Instant,
}

impl App {
    /// Create a new App instance with the HTTP backend
    pub fn new(config: FolioConfig) -> Result<Self> {
        let backend = HttpFormBackend::new()?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// Create an App with a specific submission backend
    pub fn with_backend(config: FolioConfig, backend: Arc<dyn FormBackend>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            config,
            backend,
            events_tx,
            events_rx,
            quit: false,
            frame_now: Instant::now(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the current view runs continuous animation
    pub fn is_animating(&self) -> bool {
        matches!(self.state.current_view, View::Home)
    }

    /// Per-tick update: advance the frame clock and consume what the last
    /// render observed
    pub fn on_frame(&mut self, now: Instant) {
        self.frame_now = now;

        let sections = std::mem::take(&mut self.state.visible_sections);
        for section in sections {
            self.state.effects.observe_section(section, now);
        }
        if self.state.portrait_visible {
            self.state.effects.portrait_loaded(now);
        }
    }

    /// Switch views
    fn navigate(&mut self, view: View) {
        if view != self.state.current_view {
            self.state.effects.set_hovered(None, self.frame_now);
            self.state.current_view = view;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Handle notice dismissal first (modal)
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Contact => self.handle_contact_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('1') => self.navigate(View::Home),
            KeyCode::Char('2') => self.navigate(View::Contact),
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::PageUp => self.state.scroll_up_page(),
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        // Shortcuts go first so their characters are not typed into the field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(SEND_MODIFIER) {
            self.submit_contact();
            return;
        }
        if key.code == KeyCode::Char('u') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.contact.clear_active_field();
            return;
        }

        match key.code {
            KeyCode::Esc => self.navigate(View::Home),
            KeyCode::Tab | KeyCode::Down => self.state.contact.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.contact.prev_field(),
            KeyCode::Enter => {
                // Enter breaks lines in the message box and submits from
                // the single-line fields
                if self.state.contact.active_field().is_multiline {
                    self.state.contact.input_char('\n');
                } else {
                    self.submit_contact();
                }
            }
            KeyCode::Backspace => self.state.contact.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.contact.input_char(c);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // A modal notice swallows all mouse input until dismissed
        if self.state.has_notice() {
            return;
        }

        match mouse.kind {
            MouseEventKind::Moved => {
                if matches!(self.state.current_view, View::Home) {
                    let target = self.state.redacted_span_at(mouse.column, mouse.row);
                    self.state.effects.set_hovered(target, self.frame_now);
                }
            }
            MouseEventKind::ScrollDown => {
                if matches!(self.state.current_view, View::Home) {
                    self.state.scroll_down();
                }
            }
            MouseEventKind::ScrollUp => {
                if matches!(self.state.current_view, View::Home) {
                    self.state.scroll_up();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(mouse),
            _ => {}
        }
    }

    fn handle_left_click(&mut self, mouse: MouseEvent) {
        // Nav tabs
        if mouse.row == NAV_ROW {
            let target = self
                .state
                .nav_segments
                .iter()
                .find(|(start_col, end_col, _)| {
                    mouse.column >= *start_col && mouse.column < *end_col
                })
                .map(|(_, _, view)| *view);
            if let Some(view) = target {
                self.navigate(view);
            }
            return;
        }

        if matches!(self.state.current_view, View::Contact) {
            if let Some(index) = self.state.contact_field_at(mouse.row) {
                self.state.contact.set_active_field(index);
                return;
            }

            // The button only reacts while enabled
            if self.state.submit_button_hit(mouse.column, mouse.row)
                && self.state.contact.submit_control().is_enabled()
            {
                self.submit_contact();
            }
        }
    }

    /// The submit flow. Runs the checks in order and dispatches at most one
    /// request per accepted attempt; resolution comes back as an AppEvent.
    pub fn submit_contact(&mut self) {
        // A finished form never submits again, and an outstanding request
        // blocks a second one
        if matches!(
            self.state.contact.submit_control(),
            SubmitControl::InFlight | SubmitControl::Done
        ) {
            return;
        }

        if !self.state.contact.required_filled() {
            tracing::debug!("submission rejected, required field empty");
            self.state.contact.reject_validation(STATUS_REQUIRED);
            self.state.push_notice(Notice::error(
                "Oops...",
                "All fields are required\nPlease make sure they are filled in correctly",
            ));
            return;
        }

        if !self.state.contact.email_valid() {
            tracing::debug!("submission rejected, email failed validation");
            self.state.contact.reject_validation(STATUS_INVALID_EMAIL);
            self.state.push_notice(Notice::error(
                "Oops...",
                "You've entered an invalid email address\nPlease make sure it's correct",
            ));
            return;
        }

        let request = SubmitRequest {
            action: self.config.form.action.clone(),
            method: self.config.form.method.clone(),
            entries: self.state.contact.snapshot(),
        };

        self.state.contact.mark_in_flight();
        tracing::info!(action = %request.action, "submitting contact form");
        self.spawn_submit(request);
    }

    fn spawn_submit(&self, request: SubmitRequest) {
        let backend = Arc::clone(&self.backend);
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = backend.submit(request).await;
            // The receiver only drops on shutdown
            let _ = events_tx.send(AppEvent::SubmitResolved(result));
        });
    }

    /// Drain events resolved since the last tick
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmitResolved(Ok(receipt)) if receipt.status == 200 => {
                tracing::info!("contact form submission accepted");
                self.state.contact.complete_success();
                self.state
                    .push_notice(Notice::success("Thank you!", "Thanks for your submission"));
            }
            // Any other resolution lands in the one failure branch: a
            // non-200 status and a request that never resolved read the
            // same to the visitor
            AppEvent::SubmitResolved(result) => {
                match &result {
                    Ok(receipt) => {
                        tracing::warn!(status = receipt.status, "contact form submission rejected")
                    }
                    Err(err) => tracing::warn!(error = %err, "contact form submission failed"),
                }
                self.state.contact.complete_failure();
                self.state.push_notice(
                    Notice::error("Oops...", "There was a problem submitting your form")
                        .with_contact_line(format!(
                            "Please send your email to {}",
                            self.config.form.fallback_email
                        )),
                );
            }
        }
    }
}
