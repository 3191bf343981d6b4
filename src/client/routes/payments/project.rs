use dioxus::prelude::*;

use crate::{
    api::load_failed,
    client::{
        components::{choice_options, Card, FormActions, Page, SelectInput, TextArea, TextInput},
        router::Route,
        store::{use_api, Toaster},
        util::{today, use_form},
    },
    form::{parse_choice, project_payment::ProjectPaymentDraft},
    format::format_pkr_str,
    model::enums::{LedgerType, PaymentMethod, PaymentStatus},
};

/// Records money received from a client (credit) or spent on a project (debit)
#[component]
pub fn AddProjectPayment() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let form = use_form(|| ProjectPaymentDraft::dated(today()));

    let projects = use_resource(move || async move {
        match api().list_projects().await.map_err(load_failed) {
            Ok(projects) => {
                if projects.is_empty() {
                    toaster.info("No projects found. Please create projects first.");
                }
                projects
            }
            Err(e) => {
                toaster.error(e.to_string());
                Vec::new()
            }
        }
    });

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(payment) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().create_project_payment(&payment).await {
                Ok(()) => {
                    toaster.success("Project payment created successfully!");
                    form.reset(ProjectPaymentDraft::dated(today()));
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    let project_options: Vec<(String, String)> = projects
        .read()
        .iter()
        .flatten()
        .map(|p| (p.id.clone(), p.option_label()))
        .collect();
    let loading = projects.read().is_none();
    let draft = form.draft.read();
    let needs_reference = parse_choice::<PaymentMethod>(&draft.payment_method)
        .is_some_and(|m| m.requires_transaction_id());

    rsx!(
        document::Title { "Add Project Payment | Urban Design & Construction" }
        Page {
            title: "Add Project Payment",
            actions: rsx!(Link { to: Route::PaymentSelect {}, class: "btn btn-ghost btn-sm", "Back" }),
            Card {
                form { class: "grid gap-x-4 md:grid-cols-2", novalidate: true, onsubmit,
                    SelectInput {
                        label: "Project",
                        value: draft.project.clone(),
                        options: project_options,
                        placeholder: "Select a project",
                        error: form.error("project"),
                        required: true,
                        disabled: loading,
                        onchange: move |v| form.edit("project", |d| d.project = v),
                    }
                    SelectInput {
                        label: "Payment Type",
                        value: draft.kind.clone(),
                        options: choice_options::<LedgerType>(),
                        error: form.error("type"),
                        required: true,
                        onchange: move |v| form.edit("type", |d| d.kind = v),
                    }
                    div {
                        TextInput {
                            label: "Amount",
                            kind: "number",
                            value: draft.payment_amount.clone(),
                            error: form.error("paymentAmount"),
                            required: true,
                            oninput: move |v| form.edit("paymentAmount", |d| d.payment_amount = v),
                        }
                        p { class: "text-xs opacity-70", {format_pkr_str(&draft.payment_amount)} }
                    }
                    TextInput {
                        label: "Payment Date",
                        kind: "date",
                        value: draft.payment_date.clone(),
                        error: form.error("paymentDate"),
                        required: true,
                        oninput: move |v| form.edit("paymentDate", |d| d.payment_date = v),
                    }
                    SelectInput {
                        label: "Payment Method",
                        value: draft.payment_method.clone(),
                        options: choice_options::<PaymentMethod>(),
                        placeholder: "Select a payment method",
                        error: form.error("paymentMethod"),
                        required: true,
                        onchange: move |v| form.edit("paymentMethod", |d| d.payment_method = v),
                    }
                    TextInput {
                        label: "Transaction ID",
                        value: draft.transaction_id.clone(),
                        error: form.error("transactionId"),
                        required: needs_reference,
                        oninput: move |v| form.edit("transactionId", |d| d.transaction_id = v),
                    }
                    SelectInput {
                        label: "Status",
                        value: draft.payment_status.clone(),
                        options: choice_options::<PaymentStatus>(),
                        onchange: move |v| form.edit("paymentStatus", |d| d.payment_status = v),
                    }
                    TextInput {
                        label: "Receipt Photo URL",
                        kind: "url",
                        value: draft.receipt_photo.clone(),
                        placeholder: "https://",
                        error: form.error("receiptPhoto"),
                        oninput: move |v| form.edit("receiptPhoto", |d| d.receipt_photo = v),
                    }
                    div { class: "md:col-span-2",
                        TextArea {
                            label: "Notes",
                            value: draft.notes.clone(),
                            oninput: move |v| form.edit("notes", |d| d.notes = v),
                        }
                    }
                    FormActions {
                        submitting: form.is_submitting(),
                        label: "Create Project Payment",
                        onreset: move |_| form.reset(ProjectPaymentDraft::dated(today())),
                    }
                }
            }
        }
    )
}
