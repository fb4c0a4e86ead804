//! Visual theme for the editor shell.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
