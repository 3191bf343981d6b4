use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPrint;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{Card, Page},
        routes::contracts::ProjectPicker,
        store::{use_api, Toaster},
        util::{dash, print_html},
    },
    format::{display_date, format_pkr, ledger_class, payment_status_class},
    model::{
        enums::{Choice, ProjectType},
        project::ProjectDto,
        summary::ProjectPaymentSummary,
    },
    report::{render_project_report, PrintMeta, ProjectReportKind},
};

/// Project list first, then the ledger of the chosen project
#[component]
pub fn PaymentSummary() -> Element {
    let mut selected = use_signal(|| None::<String>);

    rsx!(
        document::Title { "Payments | Urban Design & Construction" }
        match selected() {
            None => rsx!(
                ProjectPicker {
                    title: "Project Payments",
                    action: "View Payments",
                    onselect: move |p: ProjectDto| selected.set(Some(p.id)),
                }
            ),
            Some(project_id) => rsx!(
                ProjectLedger { project_id, onback: move |_| selected.set(None) }
            ),
        }
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Payments,
    Materials,
}

#[component]
fn ProjectLedger(project_id: String, onback: EventHandler<()>) -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let mut tab = use_signal(|| Tab::Payments);

    let summary = use_resource(move || {
        let project_id = project_id.clone();
        async move {
            api()
                .project_summary(&project_id)
                .await
                .map_err(|e| toaster.error(e.to_string()))
                .ok()
        }
    });

    let back = rsx!(button { class: "btn btn-ghost btn-sm no-print", onclick: move |_| onback.call(()), "Back to Projects" });
    let loaded = summary.read().as_ref().cloned();
    let failed = matches!(loaded, Some(None));

    let Some(Some(summary)) = loaded else {
        return rsx!(
            Page { title: "Project Payments", actions: back,
                if failed {
                    Card { p { class: "opacity-70", "The payment summary could not be loaded." } }
                } else {
                    div { class: "skeleton h-32 w-full" }
                }
            }
        );
    };

    let project_type = crate::form::parse_choice::<ProjectType>(&summary.project_type)
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| dash(&summary.project_type));
    let printable = summary.clone();
    let current = tab();
    let (print_label, kind) = match current {
        Tab::Payments => ("Print Payments", ProjectReportKind::ContractorPayments),
        Tab::Materials => ("Print Materials", ProjectReportKind::MaterialPayments),
    };

    rsx!(
        Page {
            title: summary.project_name.clone(),
            subtitle: project_type,
            actions: rsx!(
                {back}
                button {
                    class: "btn btn-primary btn-sm flex gap-2",
                    onclick: move |_| print_html(&render_project_report(&printable, kind, &PrintMeta::now())),
                    Icon { width: 14, height: 14, icon: FaPrint }
                    "{print_label}"
                }
            ),
            Totals { summary: summary.clone() }
            div { role: "tablist", class: "tabs tabs-border",
                button {
                    role: "tab",
                    class: if current == Tab::Payments { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Payments),
                    "Payments"
                }
                button {
                    role: "tab",
                    class: if current == Tab::Materials { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(Tab::Materials),
                    "Materials"
                }
            }
            match current {
                Tab::Payments => rsx!(PaymentsTable { summary: summary.clone() }),
                Tab::Materials => rsx!(MaterialsTable { summary }),
            }
        }
    )
}

#[component]
fn Totals(summary: ProjectPaymentSummary) -> Element {
    let net_class = if summary.net >= 0.0 {
        "stat-value text-lg text-success"
    } else {
        "stat-value text-lg text-error"
    };

    rsx!(
        div { class: "stats stats-vertical lg:stats-horizontal shadow-sm bg-base-100 w-full",
            div { class: "stat",
                div { class: "stat-title", "Project Cost" }
                div { class: "stat-value text-lg", {format_pkr(summary.project_cost)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Total Received" }
                div { class: "stat-value text-lg text-success", {format_pkr(summary.total_payment_received)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Total Debits" }
                div { class: "stat-value text-lg text-error", {format_pkr(summary.total_debits)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Material Payments" }
                div { class: "stat-value text-lg", {format_pkr(summary.total_material_payments)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Net Amount" }
                div { class: net_class, {format_pkr(summary.net)} }
            }
        }
    )
}

#[component]
fn PaymentsTable(summary: ProjectPaymentSummary) -> Element {
    if summary.payments.is_empty() {
        return rsx!(Card { p { class: "opacity-70", "No payments recorded" } });
    }

    rsx!(
        Card {
            div { class: "overflow-x-auto",
                table { class: "table table-sm",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Type" }
                            th { "Contractor" }
                            th { "Amount" }
                            th { "Method" }
                            th { "Status" }
                            th { "Transaction ID" }
                            th { "Created By" }
                        }
                    }
                    tbody {
                        for payment in summary.payments.iter() {
                            tr { key: "{payment.id}",
                                td { {display_date(&payment.date)} }
                                td { class: ledger_class(payment.kind.value()), {payment.kind.value().to_uppercase()} }
                                td { {payment.contractor_name().unwrap_or("-").to_string()} }
                                td { class: "font-semibold", {format_pkr(payment.amount)} }
                                td { {dash(&payment.payment_method)} }
                                td { span { class: payment_status_class(&payment.status), "{payment.status}" } }
                                td { {dash(payment.transaction_id.as_deref().unwrap_or_default())} }
                                td { {payment.creator_name().unwrap_or("N/A").to_string()} }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn MaterialsTable(summary: ProjectPaymentSummary) -> Element {
    if summary.materials.is_empty() {
        return rsx!(Card { p { class: "opacity-70", "No material payments recorded" } });
    }

    rsx!(
        Card {
            div { class: "overflow-x-auto",
                table { class: "table table-sm",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Material" }
                            th { "Provider" }
                            th { "Quantity" }
                            th { "Rate" }
                            th { "Total" }
                        }
                    }
                    tbody {
                        for material in summary.materials.iter() {
                            tr { key: "{material.id}",
                                td { {display_date(&material.date)} }
                                td { {dash(&material.material_detail)} }
                                td { {dash(&material.material_provider)} }
                                td { {material.quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string())} }
                                td { {material.rate.map(format_pkr).unwrap_or_else(|| "-".to_string())} }
                                td { class: "font-semibold", {format_pkr(material.total_amount)} }
                            }
                        }
                    }
                }
            }
        }
    )
}
