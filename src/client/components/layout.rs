use dioxus::prelude::*;

use crate::client::{
    components::{Sidebar, TopBar},
    router::Route,
    store::AuthState,
};

/// Shell of every `/dashboard` screen; sends anonymous visitors to the login screen.
#[component]
pub fn DashboardLayout() -> Element {
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();

    use_effect(move || {
        if !auth.is_signed_in() {
            navigator.replace(Route::Login {});
        }
    });

    if !auth.is_signed_in() {
        return rsx!();
    }

    rsx!(
        div { class: "flex min-h-screen bg-base-200",
            Sidebar {}
            div { class: "flex-1 flex flex-col min-w-0",
                TopBar {}
                main { class: "flex-1 p-4 md:p-6",
                    Outlet::<Route> {}
                }
            }
        }
    )
}
