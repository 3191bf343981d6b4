use dioxus::prelude::*;

/// Content area of a dashboard screen with its heading
#[component]
pub fn Page(
    title: String,
    subtitle: Option<String>,
    class: Option<&'static str>,
    actions: Option<Element>,
    children: Element,
) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "w-full max-w-[1440px] mx-auto flex flex-col gap-4 {class}",
            div { class: "flex flex-wrap items-center justify-between gap-2",
                div {
                    h1 { class: "text-2xl font-semibold", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "text-sm opacity-70", "{subtitle}" }
                    }
                }
                if let Some(actions) = actions {
                    div { class: "flex gap-2 no-print", {actions} }
                }
            }
            {children}
        }
    )
}

#[component]
pub fn Card(title: Option<String>, children: Element) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-sm w-full",
            div {
                class: "card-body",
                if let Some(title) = title {
                    h2 { class: "card-title", "{title}" }
                }
                {children}
            }
        }
    )
}
