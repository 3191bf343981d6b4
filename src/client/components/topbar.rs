use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{router::Route, store::AuthState};

#[component]
pub fn TopBar() -> Element {
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();

    let user_name = auth
        .session
        .read()
        .as_ref()
        .map(|s| s.user.user_name.clone())
        .unwrap_or_default();
    let initial = initial(&user_name);

    rsx!(
        div {
            class: "navbar bg-base-100 border-b border-base-300 no-print",
            div {
                class: "navbar-start",
                Link { to: Route::Dashboard {}, class: "md:hidden font-bold text-primary", "Urban Design" }
            }
            div {
                class: "navbar-end gap-3",
                div { class: "flex items-center gap-2",
                    div { class: "avatar avatar-placeholder",
                        div { class: "bg-neutral text-neutral-content w-8 rounded-full",
                            span { class: "text-xs", "{initial}" }
                        }
                    }
                    p { class: "text-sm", "{user_name}" }
                }
                button {
                    class: "btn btn-outline btn-sm flex gap-2",
                    onclick: move |_| {
                        auth.sign_out();
                        navigator.replace(Route::Login {});
                    },
                    Icon { width: 14, height: 14, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    )
}

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
}
