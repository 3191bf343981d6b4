use dioxus::prelude::*;

use crate::client::components::{Card, Page};

#[component]
pub fn Reports() -> Element {
    rsx!(
        document::Title { "Reports | Urban Design & Construction" }
        Page { title: "Reports",
            Card {
                p { "Printable project and contract reports are available from the payment summary screens." }
            }
        }
    )
}

#[component]
pub fn Settings() -> Element {
    rsx!(
        document::Title { "Settings | Urban Design & Construction" }
        Page { title: "Settings",
            Card {
                p { "There are no configurable settings yet." }
            }
        }
    )
}
