use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::ToastHost,
        router::Route,
        store::{AuthState, Toaster},
    },
    config::Config,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_env);

    rsx! {
        document::Title { "Urban Design & Construction" }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        document::Stylesheet { href: MAIN_CSS }

        match config {
            Ok(config) => rsx! { Console { config } },
            Err(e) => rsx! { ConfigError { message: e.to_string() } },
        }
    }
}

/// Provides the shared state and mounts the router
#[component]
fn Console(config: Config) -> Element {
    use_context_provider(|| Signal::new(config));
    use_context_provider(AuthState::restore);
    use_context_provider(Toaster::new);

    rsx! {
        Router::<Route> {}
        ToastHost {}
    }
}

#[component]
fn ConfigError(message: String) -> Element {
    use_hook(|| tracing::error!("Configuration error: {}", message));

    rsx! {
        div { class: "min-h-screen flex items-center justify-center p-4",
            div { class: "card bg-base-200 shadow-sm max-w-lg w-full",
                div { class: "card-body",
                    h2 { class: "card-title text-error", "Configuration error" }
                    p { "{message}" }
                    p { class: "text-sm opacity-70",
                        "Set API_URL to the backend base URL and restart the console."
                    }
                }
            }
        }
    }
}
