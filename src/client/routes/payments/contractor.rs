use dioxus::prelude::*;
use futures::future::try_join3;

use crate::{
    api::load_failed,
    client::{
        components::{choice_options, Card, FormActions, Page, SelectInput, TextArea, TextInput},
        router::Route,
        store::{use_api, Toaster},
        util::{today, use_form},
    },
    form::payment::PaymentDraft,
    format::format_pkr_str,
    model::{
        contract::ContractDto,
        contractor::ContractorDto,
        enums::{PaymentMethod, PaymentStatus},
        project::ProjectDto,
    },
    picker::ContractPicker,
};

#[derive(Clone, Default, PartialEq)]
struct Prerequisites {
    projects: Vec<ProjectDto>,
    contractors: Vec<ContractorDto>,
    contracts: Vec<ContractDto>,
}

#[derive(Clone, Copy)]
enum PickField {
    Project,
    Contractor,
    Contract,
}

impl PickField {
    fn key(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Contractor => "contractor",
            Self::Contract => "contract",
        }
    }
}

#[component]
pub fn AddContractorPayment() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let form = use_form(|| PaymentDraft::dated(today()));
    let mut picker = use_signal(ContractPicker::default);

    let prerequisites = use_resource(move || async move {
        let client = api();
        match try_join3(
            client.list_projects(),
            client.list_contractors(),
            client.list_contracts(),
        )
        .await
        .map_err(load_failed)
        {
            Ok((projects, contractors, contracts)) => {
                if projects.is_empty() {
                    toaster.info("No projects found. Please create projects first.");
                } else if contractors.is_empty() {
                    toaster.info("No contractors found. Please add contractors first.");
                }
                Prerequisites {
                    projects,
                    contractors,
                    contracts,
                }
            }
            Err(e) => {
                toaster.error(e.to_string());
                Prerequisites::default()
            }
        }
    });

    // Applies one selection to the picker, then copies all three selections into the draft.
    let mut pick = move |field: PickField, value: String| {
        let chosen = {
            let loaded = prerequisites.read();
            let contracts = loaded.as_ref().map(|l| l.contracts.as_slice()).unwrap_or_default();
            let mut current = picker.write();
            match field {
                PickField::Project => current.set_project(value, contracts),
                PickField::Contractor => current.set_contractor(value, contracts),
                PickField::Contract => current.set_contract(value, contracts),
            }
            (*current).clone()
        };
        form.edit(field.key(), |d| {
            d.project = chosen.project;
            d.contractor = chosen.contractor;
            d.contract = chosen.contract;
        });
    };

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(payment) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().create_payment(&payment).await {
                Ok(()) => {
                    toaster.success("Payment created successfully!");
                    form.reset(PaymentDraft::dated(today()));
                    picker.set(ContractPicker::default());
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    type Options = Vec<(String, String)>;
    let (project_options, contractor_options, contract_options): (Options, Options, Options) =
        match &*prerequisites.read() {
            Some(loaded) => (
                loaded
                    .projects
                    .iter()
                    .map(|p| (p.id.clone(), p.option_label()))
                    .collect(),
                loaded
                    .contractors
                    .iter()
                    .map(|c| (c.id.clone(), c.company_name.clone()))
                    .collect(),
                picker
                    .read()
                    .available(&loaded.contracts)
                    .into_iter()
                    .map(|c| (c.id.clone(), c.option_label()))
                    .collect(),
            ),
            None => Default::default(),
        };
    let loading = prerequisites.read().is_none();
    let contract_enabled = picker.read().contract_enabled();
    let contract_placeholder: &'static str = if contract_enabled {
        "Select a contract (optional)"
    } else {
        "Select project and contractor first"
    };
    let draft = form.draft.read();
    let needs_reference = crate::form::parse_choice::<PaymentMethod>(&draft.payment_method)
        .is_some_and(|m| m.requires_transaction_id());

    rsx!(
        document::Title { "Add Contractor Payment | Urban Design & Construction" }
        Page {
            title: "Add Contractor Payment",
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
                        onchange: move |v| pick(PickField::Project, v),
                    }
                    SelectInput {
                        label: "Contractor",
                        value: draft.contractor.clone(),
                        options: contractor_options,
                        placeholder: "Select a contractor",
                        error: form.error("contractor"),
                        required: true,
                        disabled: loading,
                        onchange: move |v| pick(PickField::Contractor, v),
                    }
                    SelectInput {
                        label: "Contract",
                        value: draft.contract.clone(),
                        options: contract_options,
                        placeholder: contract_placeholder,
                        disabled: loading || !contract_enabled,
                        onchange: move |v| pick(PickField::Contract, v),
                    }
                    TextInput {
                        label: "Payment Date",
                        kind: "date",
                        value: draft.date.clone(),
                        error: form.error("date"),
                        required: true,
                        oninput: move |v| form.edit("date", |d| d.date = v),
                    }
                    div {
                        TextInput {
                            label: "Amount",
                            kind: "number",
                            value: draft.amount.clone(),
                            error: form.error("amount"),
                            required: true,
                            oninput: move |v| form.edit("amount", |d| d.amount = v),
                        }
                        p { class: "text-xs opacity-70", {format_pkr_str(&draft.amount)} }
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
                        value: draft.status.clone(),
                        options: choice_options::<PaymentStatus>(),
                        onchange: move |v| form.edit("status", |d| d.status = v),
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
                            label: "Work Description",
                            value: draft.work_description.clone(),
                            oninput: move |v| form.edit("workDescription", |d| d.work_description = v),
                        }
                        TextArea {
                            label: "Notes",
                            value: draft.notes.clone(),
                            oninput: move |v| form.edit("notes", |d| d.notes = v),
                        }
                    }
                    FormActions {
                        submitting: form.is_submitting(),
                        label: "Create Payment",
                        onreset: move |_| {
                            form.reset(PaymentDraft::dated(today()));
                            picker.set(ContractPicker::default());
                        },
                    }
                }
            }
        }
    )
}
