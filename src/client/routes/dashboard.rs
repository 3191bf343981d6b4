use dioxus::prelude::*;

use crate::client::{
    components::{Card, Page},
    router::Route,
    store::AuthState,
    util::today,
};

#[component]
pub fn Dashboard() -> Element {
    let auth = use_context::<AuthState>();
    let user_name = auth
        .session
        .read()
        .as_ref()
        .map(|s| s.user.user_name.clone())
        .unwrap_or_default();
    let date = today().format("%A, %d %B %Y").to_string();

    rsx!(
        document::Title { "Dashboard | Urban Design & Construction" }
        Page { title: format!("Welcome back, {user_name}"), subtitle: date,
            div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                ShortcutCard {
                    title: "Projects",
                    text: "Create projects and track their pricing and progress.",
                    to: Route::ProjectList {},
                    action: "View Projects",
                }
                ShortcutCard {
                    title: "Project Contracts",
                    text: "Browse contracts per project and print payment receipts.",
                    to: Route::ContractPayments {},
                    action: "View Contracts",
                }
                ShortcutCard {
                    title: "Payments",
                    text: "Record contractor, material and project payments.",
                    to: Route::PaymentSelect {},
                    action: "Add Payment",
                }
                ShortcutCard {
                    title: "Payment Summary",
                    text: "Review project ledgers and print reports.",
                    to: Route::PaymentSummary {},
                    action: "View Summary",
                }
                ShortcutCard {
                    title: "Contractors",
                    text: "Manage contractor companies and their terms.",
                    to: Route::ContractorList {},
                    action: "View Contractors",
                }
                ShortcutCard {
                    title: "Clients",
                    text: "Manage the customers projects are built for.",
                    to: Route::ClientList {},
                    action: "View Clients",
                }
            }
        }
    )
}

#[component]
fn ShortcutCard(title: String, text: &'static str, to: Route, action: &'static str) -> Element {
    rsx!(
        Card { title,
            p { class: "text-sm opacity-70", "{text}" }
            div { class: "card-actions justify-end",
                Link { to, class: "btn btn-primary btn-sm", "{action}" }
            }
        }
    )
}
