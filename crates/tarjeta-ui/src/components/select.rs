//! Dropdown selector over a closed set of options.

use dioxus::prelude::*;

use super::input::rand_id;

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Currently selected option label
    pub value: String,
    /// Handler called with the newly selected label
    pub onchange: EventHandler<String>,
    /// Selectable option labels, in display order
    pub options: Vec<String>,
    /// Label above the selector
    #[props(default)]
    pub label: Option<String>,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Dropdown selector
///
/// The caller owns the mapping between labels and domain values; the
/// component only deals in display strings.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Select {
///         label: "Plantilla".to_string(),
///         value: card.read().template.label().to_string(),
///         options: Template::ALL.iter().map(|t| t.label().to_string()).collect(),
///         onchange: move |label: String| card.write().template = Template::from_label(&label),
///     }
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("select-{}", rand_id()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "field-label", r#for: "{id}", "{label}" }
            }
            select {
                id: "{id}",
                class: "input-field select-field",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                for opt in props.options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == props.value,
                        "{opt}"
                    }
                }
            }
        }
    }
}
