//! Labelled form controls with an inline error line.

use dioxus::prelude::*;

use crate::model::enums::Choice;

/// `(value, label)` pairs for every variant of a closed value set
pub fn choice_options<T: Choice>() -> Vec<(String, String)> {
    T::all()
        .into_iter()
        .map(|c| (c.value().to_string(), c.label().to_string()))
        .collect()
}

#[component]
fn FieldError(error: Option<String>) -> Element {
    rsx!(
        if let Some(error) = error {
            p { class: "field-error", "{error}" }
        }
    )
}

#[component]
pub fn TextInput(
    label: &'static str,
    value: String,
    oninput: EventHandler<String>,
    error: Option<String>,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] placeholder: &'static str,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] readonly: bool,
) -> Element {
    let input_class = if error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend",
                "{label}"
                if required {
                    span { class: "text-error", " *" }
                }
            }
            input {
                class: input_class,
                r#type: kind,
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                readonly: readonly,
                step: "any",
                oninput: move |e| oninput.call(e.value()),
            }
            FieldError { error }
        }
    )
}

#[component]
pub fn TextArea(
    label: &'static str,
    value: String,
    oninput: EventHandler<String>,
    error: Option<String>,
    #[props(default)] placeholder: &'static str,
) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            textarea {
                class: "textarea textarea-bordered w-full",
                rows: 3,
                value: value,
                placeholder: placeholder,
                oninput: move |e| oninput.call(e.value()),
            }
            FieldError { error }
        }
    )
}

/// A select whose first option is an empty "Select ..." placeholder
#[component]
pub fn SelectInput(
    label: &'static str,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
    error: Option<String>,
    #[props(default = "Select an option")] placeholder: &'static str,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
) -> Element {
    let select_class = if error.is_some() {
        "select select-bordered select-error w-full"
    } else {
        "select select-bordered w-full"
    };

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend",
                "{label}"
                if required {
                    span { class: "text-error", " *" }
                }
            }
            select {
                class: select_class,
                value: value.clone(),
                disabled: disabled,
                onchange: move |e| onchange.call(e.value()),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for (option_value, option_label) in options {
                    option {
                        value: option_value.clone(),
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
            FieldError { error }
        }
    )
}

/// Submit and reset buttons shared by the create forms
#[component]
pub fn FormActions(submitting: bool, label: &'static str, onreset: EventHandler<()>) -> Element {
    rsx!(
        div { class: "md:col-span-2 flex justify-end gap-2 mt-4",
            button {
                class: "btn btn-ghost",
                r#type: "button",
                disabled: submitting,
                onclick: move |_| onreset.call(()),
                "Reset"
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting,
                if submitting { "Saving..." } else { "{label}" }
            }
        }
    )
}
