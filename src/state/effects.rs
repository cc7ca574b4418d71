//! Cosmetic animation state for the Home view
//!
//! Flicker on redacted runs, one-shot fade-in for sections scrolled into
//! view, and the portrait load fade. All of it is presentational: every
//! method is total, and none of it touches the contact form.
//!
//! Callers pass `now` explicitly so the phase math is testable without
//! mocking the clock.

use std::time::{Duration, Instant};

/// Flicker period while the mouse is away
const FLICKER_SLOW: Duration = Duration::from_secs(3);
/// Flicker period while hovering a redacted run
const FLICKER_FAST: Duration = Duration::from_millis(100);
/// Deepest dip of the flicker; the bar stays visible
const FLICKER_FLOOR: f32 = 0.35;
/// Section fade duration
const SECTION_FADE: Duration = Duration::from_millis(600);
/// Portrait load fade duration
const PORTRAIT_FADE: Duration = Duration::from_millis(300);
/// Rows a section sits low while fading in (the 20px translate analog)
pub const SECTION_RISE_ROWS: u16 = 2;

/// Sections of the Home view that fade in on first visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    Intro,
    Bio,
}

/// One-shot fade started by first visibility
#[derive(Debug, Clone, Copy)]
struct FadeIn {
    started: Option<Instant>,
    duration: Duration,
}

impl FadeIn {
    fn new(duration: Duration) -> Self {
        Self {
            started: None,
            duration,
        }
    }

    /// Start the fade if it has not run yet; later calls are no-ops
    fn begin(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Eased progress in [0.0, 1.0]; 0.0 before the fade begins
    fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        simple_easing::cubic_out(t)
    }
}

/// Animation state for the Home view
#[derive(Debug)]
pub struct EffectsState {
    /// Phase epoch for the slow flicker
    flicker_epoch: Instant,
    /// Redacted run under the mouse, with the hover start time
    hovered: Option<(usize, Instant)>,
    intro: FadeIn,
    bio: FadeIn,
    portrait: FadeIn,
}

impl EffectsState {
    pub fn new(now: Instant) -> Self {
        Self {
            flicker_epoch: now,
            hovered: None,
            intro: FadeIn::new(SECTION_FADE),
            bio: FadeIn::new(SECTION_FADE),
            portrait: FadeIn::new(PORTRAIT_FADE),
        }
    }

    /// Record which redacted run the mouse is over. Moving onto a different
    /// run restarts the fast phase; staying on the same run keeps it.
    pub fn set_hovered(&mut self, index: Option<usize>, now: Instant) {
        self.hovered = match (index, self.hovered) {
            (None, _) => None,
            (Some(new), Some((old, since))) if new == old => Some((old, since)),
            (Some(new), _) => Some((new, now)),
        };
    }

    #[allow(dead_code)]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered.map(|(index, _)| index)
    }

    /// Flicker opacity for one redacted run, always within
    /// [FLICKER_FLOOR, 1.0]. Hovered runs cycle at the fast period.
    pub fn flicker_alpha(&self, index: usize, now: Instant) -> f32 {
        let (period, epoch) = match self.hovered {
            Some((i, since)) if i == index => (FLICKER_FAST, since),
            _ => (FLICKER_SLOW, self.flicker_epoch),
        };
        let elapsed = now.saturating_duration_since(epoch).as_secs_f32();
        let phase = (elapsed / period.as_secs_f32()).fract();
        // Triangle wave 0 -> 1 -> 0 across the period, eased
        let dip = if phase < 0.5 {
            phase * 2.0
        } else {
            (1.0 - phase) * 2.0
        };
        1.0 - (1.0 - FLICKER_FLOOR) * simple_easing::sine_in_out(dip)
    }

    /// Mark a section visible; the first sighting starts its fade and the
    /// animation never replays afterwards
    pub fn observe_section(&mut self, section: HomeSection, now: Instant) {
        match section {
            HomeSection::Intro => self.intro.begin(now),
            HomeSection::Bio => self.bio.begin(now),
        }
    }

    /// Opacity of a section, 0.0 until it has been seen
    pub fn section_alpha(&self, section: HomeSection, now: Instant) -> f32 {
        self.fade(section).progress(now)
    }

    /// Rows the section still sits below its final position
    pub fn section_rise(&self, section: HomeSection, now: Instant) -> u16 {
        let remaining = (1.0 - self.fade(section).progress(now)) * f32::from(SECTION_RISE_ROWS);
        remaining.round() as u16
    }

    fn fade(&self, section: HomeSection) -> &FadeIn {
        match section {
            HomeSection::Intro => &self.intro,
            HomeSection::Bio => &self.bio,
        }
    }

    /// Start the portrait fade the first time it renders (the image load
    /// event); once complete it stays fully visible
    pub fn portrait_loaded(&mut self, now: Instant) {
        self.portrait.begin(now);
    }

    /// Portrait opacity, 0.0 until loaded
    pub fn portrait_alpha(&self, now: Instant) -> f32 {
        self.portrait.progress(now)
    }
}
