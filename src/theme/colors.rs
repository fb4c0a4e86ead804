//! Color constants for the editor shell.
//!
//! Dark studio palette around the brand indigo and magenta. The card
//! itself only uses the user-picked colors; this palette is the chrome
//! around it.

#![allow(dead_code)]

// === SHELL (Backgrounds) ===
pub const SHELL_BLACK: &str = "#1d1d1b";
pub const PANEL_GRAY: &str = "#2a2a28";
pub const FIELD_GRAY: &str = "#374151";
pub const FIELD_BORDER: &str = "#4b5563";

// === BRAND ===
pub const INDIGO: &str = "#3645a9";
pub const INDIGO_DARK: &str = "#2d378a";
pub const MAGENTA: &str = "#993399";
pub const MAGENTA_DARK: &str = "#862d86";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#e5e7eb";
pub const TEXT_SECONDARY: &str = "#9ca3af";
pub const TEXT_MUTED: &str = "#6b7280";

// === SEMANTIC ===
pub const DANGER: &str = "#f87171";
