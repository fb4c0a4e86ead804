//! Text input field.
//!
//! Single-line input bound to one model field. The placeholder doubles as
//! the visible label, matching the compact control panel layout.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text, shown while the field is empty
    #[props(default)]
    pub placeholder: Option<String>,
    /// Optional label above the field
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, tel, url)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Text input field bound to a single value
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         placeholder: "Nombre Completo".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "field-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Generate a simple random ID for form elements
pub(crate) fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_id_stays_bounded() {
        for _ in 0..10 {
            assert!(rand_id() < 1_000_000);
        }
    }
}
