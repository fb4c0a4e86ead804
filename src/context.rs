//! Card model context for the editor.
//!
//! Provides the single CardData instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In any child component
//! let mut card = use_card();
//! card.write().full_name = "Ana".to_string();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use tarjeta_core::CardData;

/// Get the directory exported cards are written to.
pub fn get_export_dir() -> PathBuf {
    crate::get_export_dir()
}

/// Hook to access the shared card model from context.
///
/// Every control writes through this signal; the preview re-renders on
/// any change.
pub fn use_card() -> Signal<CardData> {
    use_context::<Signal<CardData>>()
}
