//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the send shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for status bar hints
/// - macOS: "Cmd+S"
/// - Linux/Windows: "Ctrl+S"
#[cfg(target_os = "macos")]
pub const SEND_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SEND_SHORTCUT: &str = "Ctrl+S";
