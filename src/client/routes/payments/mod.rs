use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBuilding, FaCubes, FaUserTie};
use dioxus_free_icons::Icon;

mod contractor;
mod material;
mod project;
mod summary;

pub use contractor::AddContractorPayment;
pub use material::AddMaterialPayment;
pub use project::AddProjectPayment;
pub use summary::PaymentSummary;

use crate::client::{components::Page, router::Route};

/// Entry point for recording a payment; one card per payment flavour
#[component]
pub fn PaymentSelect() -> Element {
    rsx!(
        document::Title { "Add Payment | Urban Design & Construction" }
        Page {
            title: "Add Payment",
            subtitle: "Choose the kind of payment to record",
            div { class: "grid gap-4 md:grid-cols-3",
                PaymentKindCard {
                    to: Route::AddContractorPayment {},
                    icon: rsx!(Icon { width: 32, height: 32, icon: FaUserTie }),
                    title: "Contractor Payment",
                    description: "Pay a contractor, optionally against one of their project contracts",
                }
                PaymentKindCard {
                    to: Route::AddMaterialPayment {},
                    icon: rsx!(Icon { width: 32, height: 32, icon: FaCubes }),
                    title: "Material Payment",
                    description: "Record a material purchase for a project",
                }
                PaymentKindCard {
                    to: Route::AddProjectPayment {},
                    icon: rsx!(Icon { width: 32, height: 32, icon: FaBuilding }),
                    title: "Project Payment",
                    description: "Record money received from or spent on a project",
                }
            }
        }
    )
}

#[component]
fn PaymentKindCard(
    to: Route,
    icon: Element,
    title: &'static str,
    description: &'static str,
) -> Element {
    rsx!(
        Link { to, class: "card bg-base-100 shadow-sm hover:shadow-md transition-shadow",
            div { class: "card-body items-center text-center",
                {icon}
                h3 { class: "card-title", "{title}" }
                p { class: "text-sm opacity-70", "{description}" }
            }
        }
    )
}
