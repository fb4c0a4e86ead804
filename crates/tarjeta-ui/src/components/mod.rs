//! Form controls used by the editor's control panel.

mod button;
mod color_input;
mod input;
mod select;

pub use button::*;
pub use color_input::*;
pub use input::*;
pub use select::*;
