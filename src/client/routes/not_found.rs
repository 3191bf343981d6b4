use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        document::Title { "Page not found | Urban Design & Construction" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4 p-4",
            p { class: "text-6xl font-bold opacity-30", "404" }
            p { class: "text-lg", "Nothing lives at " code { "{path}" } }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to Dashboard" }
        }
    )
}
