use dioxus::prelude::*;

use crate::listing::Direction;

#[component]
pub fn SearchBox(value: String, placeholder: &'static str, oninput: EventHandler<String>) -> Element {
    rsx!(
        label { class: "input input-bordered flex items-center gap-2 w-full max-w-sm",
            input {
                r#type: "search",
                class: "grow",
                value: value,
                placeholder: placeholder,
                oninput: move |e| oninput.call(e.value()),
            }
        }
    )
}

/// A clickable column heading showing the current sort direction
#[component]
pub fn SortHeader(label: &'static str, direction: Option<Direction>, onclick: EventHandler<()>) -> Element {
    let marker = match direction {
        Some(Direction::Asc) => " ▲",
        Some(Direction::Desc) => " ▼",
        None => "",
    };

    rsx!(
        th {
            class: "cursor-pointer select-none",
            onclick: move |_| onclick.call(()),
            "{label}{marker}"
        }
    )
}

#[component]
pub fn Pagination(
    summary: String,
    page: usize,
    total_pages: usize,
    onprev: EventHandler<()>,
    onnext: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "flex flex-wrap items-center justify-between gap-2 mt-2 no-print",
            p { class: "text-sm opacity-70", "{summary}" }
            div { class: "join",
                button {
                    class: "join-item btn btn-sm",
                    disabled: page <= 1,
                    onclick: move |_| onprev.call(()),
                    "Previous"
                }
                button { class: "join-item btn btn-sm btn-disabled", "Page {page} of {total_pages}" }
                button {
                    class: "join-item btn btn-sm",
                    disabled: page >= total_pages,
                    onclick: move |_| onnext.call(()),
                    "Next"
                }
            }
        }
    )
}

