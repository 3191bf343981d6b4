use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBuilding, FaChartBar, FaFileContract, FaGear, FaHouse, FaMoneyBill, FaUserTie, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn Sidebar() -> Element {
    rsx!(
        aside {
            class: "w-64 shrink-0 bg-base-100 border-r border-base-300 no-print hidden md:block",
            div { class: "p-4 border-b border-base-300",
                Link { to: Route::Dashboard {},
                    p { class: "text-lg font-bold text-primary", "Urban Design" }
                    p { class: "text-xs opacity-70", "& Construction" }
                }
            }
            ul { class: "menu w-full",
                li {
                    Link { to: Route::Dashboard {}, class: "sidebar-link", active_class: "active",
                        Icon { width: 16, height: 16, icon: FaHouse }
                        "Dashboard"
                    }
                }
                SidebarGroup { title: "Projects",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaBuilding }),
                    links: vec![(Route::ProjectList {}, "All Projects"), (Route::AddProject {}, "Add Project")],
                }
                SidebarGroup { title: "Project Contracts",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaFileContract }),
                    links: vec![(Route::ContractPayments {}, "Contract Payments"), (Route::AddContract {}, "Add Contract")],
                }
                SidebarGroup { title: "Payments",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaMoneyBill }),
                    links: vec![(Route::PaymentSummary {}, "Payment Summary"), (Route::PaymentSelect {}, "Add Payment")],
                }
                SidebarGroup { title: "Contractors",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaUserTie }),
                    links: vec![(Route::ContractorList {}, "All Contractors"), (Route::AddContractor {}, "Add Contractor")],
                }
                SidebarGroup { title: "Clients",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
                    links: vec![(Route::ClientList {}, "All Clients"), (Route::AddClient {}, "Add Client")],
                }
                SidebarGroup { title: "Users",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
                    links: vec![(Route::UserList {}, "All Users"), (Route::AddUser {}, "Add User")],
                }
                li {
                    Link { to: Route::Reports {}, class: "sidebar-link", active_class: "active",
                        Icon { width: 16, height: 16, icon: FaChartBar }
                        "Reports"
                    }
                }
                li {
                    Link { to: Route::Settings {}, class: "sidebar-link", active_class: "active",
                        Icon { width: 16, height: 16, icon: FaGear }
                        "Settings"
                    }
                }
            }
        }
    )
}

/// A collapsible group of links; starts expanded when one of its routes is current
#[component]
fn SidebarGroup(title: &'static str, icon: Element, links: Vec<(Route, &'static str)>) -> Element {
    let current = use_route::<Route>();
    let mut open = use_signal(|| links.iter().any(|(route, _)| *route == current));

    rsx!(
        li {
            button {
                class: "flex items-center gap-2 w-full",
                onclick: move |_| open.toggle(),
                {icon}
                span { class: "flex-1 text-left", "{title}" }
                span { class: "text-xs", if open() { "-" } else { "+" } }
            }
            if open() {
                ul {
                    for (route, label) in links {
                        li {
                            Link { to: route, class: "sidebar-link", active_class: "active", "{label}" }
                        }
                    }
                }
            }
        }
    )
}
