//! UI components for the card editor.

mod card_preview;
mod control_panel;
mod export;
mod logo_picker;

pub use card_preview::CardPreview;
pub use control_panel::ControlPanel;
pub use logo_picker::LogoPicker;
