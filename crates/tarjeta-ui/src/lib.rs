//! Tarjeta UI Components
//!
//! Reusable Dioxus form controls for the card editor: text inputs,
//! dropdown selectors, color pickers and buttons. Visuals come from the
//! application's global stylesheet; these components only provide
//! structure and wiring.

pub mod components;

pub use components::*;
