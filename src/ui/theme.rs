//! Shared color tokens for the UI
//!
//! Semantic colors live here so the form, the dialogs and the chrome
//! agree on what "success" and "failure" look like.

use ratatui::style::Color;

/// Verdict color for a passing email check, the Done button and the
/// success dialog chrome.
pub const SUCCESS: Color = Color::Green;

/// Verdict color for a failing email check, the status line and the
/// error dialog chrome.
pub const DANGER: Color = Color::Red;

/// Color for interactive elements: nav tabs, the active field border,
/// the enabled submit button and key hints inside dialogs.
pub const ACCENT: Color = Color::Cyan;

/// Color for inactive chrome: idle field borders, the nav bar frame
/// and disabled buttons.
pub const MUTED: Color = Color::DarkGray;
