use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::store::Toaster;

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_context::<Toaster>();
    let current = toaster.current.read().clone();

    rsx!(
        if let Some(toast) = current {
            div { class: "toast toast-top toast-end toast-host no-print",
                div { class: format!("{} shadow-md", toast.kind.alert_class()), role: "alert",
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        aria_label: "Dismiss",
                        onclick: move |_| toaster.dismiss(toast.id),
                        Icon { width: 12, height: 12, icon: FaXmark }
                    }
                }
            }
        }
    )
}
