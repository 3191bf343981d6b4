use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            choice_options, Card, FormActions, Page, Pagination, SearchBox, SelectInput, SortHeader,
            TextArea, TextInput,
        },
        router::Route,
        store::{use_api, Toaster},
        util::{dash, today, use_form, user_options},
    },
    form::contractor::ContractorDraft,
    listing::{ContractorSortKey, ListState},
    model::enums::{ContractorType, PaymentTerms},
};

#[component]
pub fn ContractorList() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let mut state = use_signal(ListState::<ContractorSortKey>::default);

    let contractors = use_resource(move || async move {
        api().list_contractors().await.unwrap_or_else(|e| {
            toaster.error(e.to_string());
            Vec::new()
        })
    });

    rsx!(
        document::Title { "Contractors | Urban Design & Construction" }
        Page {
            title: "Contractors",
            actions: rsx!(Link { to: Route::AddContractor {}, class: "btn btn-primary btn-sm", "Add Contractor" }),
            Card {
                SearchBox {
                    value: state.read().search().to_string(),
                    placeholder: "Search by company, owner, type or phone",
                    oninput: move |v: String| state.write().set_search(v),
                }
                match &*contractors.read_unchecked() {
                    None => rsx!(div { class: "skeleton h-32 w-full" }),
                    Some(rows) => {
                        let page = state.read().apply(rows);
                        let (current, total_pages) = (page.page, page.total_pages);
                        rsx!(
                            div { class: "overflow-x-auto",
                                table { class: "table table-md",
                                    thead {
                                        tr {
                                            SortHeader {
                                                label: "Company",
                                                direction: state.read().direction_of(ContractorSortKey::CompanyName),
                                                onclick: move |_| state.write().toggle_sort(ContractorSortKey::CompanyName),
                                            }
                                            th { "Owner" }
                                            SortHeader {
                                                label: "Type",
                                                direction: state.read().direction_of(ContractorSortKey::ContractorType),
                                                onclick: move |_| state.write().toggle_sort(ContractorSortKey::ContractorType),
                                            }
                                            SortHeader {
                                                label: "Payment Terms",
                                                direction: state.read().direction_of(ContractorSortKey::PaymentTerms),
                                                onclick: move |_| state.write().toggle_sort(ContractorSortKey::PaymentTerms),
                                            }
                                            th { "Phone" }
                                        }
                                    }
                                    tbody {
                                        if page.rows.is_empty() {
                                            tr { td { colspan: 5, class: "text-center opacity-70", "No contractors found" } }
                                        }
                                        for contractor in page.rows.iter() {
                                            tr { key: "{contractor.id}",
                                                td { class: "font-medium", "{contractor.company_name}" }
                                                td { {dash(contractor.owner_name().unwrap_or_default())} }
                                                td { span { class: "badge badge-outline", "{contractor.contractor_type}" } }
                                                td { {dash(&contractor.payment_terms)} }
                                                td { {dash(&contractor.phone_number)} }
                                            }
                                        }
                                    }
                                }
                            }
                            Pagination {
                                summary: page.summary(),
                                page: current,
                                total_pages,
                                onprev: move |_| state.write().set_page(current - 1),
                                onnext: move |_| state.write().set_page(current + 1),
                            }
                        )
                    }
                }
            }
        }
    )
}

#[component]
pub fn AddContractor() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let form = use_form(ContractorDraft::default);

    let users = use_resource(move || async move {
        match api().list_users().await {
            Ok(users) => {
                if users.is_empty() {
                    toaster.info("No users found. Please add users first.");
                }
                users
            }
            Err(_) => {
                toaster.error("Failed to load users. Please refresh the page.");
                Vec::new()
            }
        }
    });

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(contractor) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().create_contractor(&contractor).await {
                Ok(()) => {
                    toaster.success("Contractor created successfully!");
                    form.reset(ContractorDraft::default());
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    let options = users.read().as_deref().map(user_options).unwrap_or_default();
    let draft = form.draft.read();

    rsx!(
        document::Title { "Add Contractor | Urban Design & Construction" }
        Page {
            title: "Add Contractor",
            actions: rsx!(Link { to: Route::ContractorList {}, class: "btn btn-ghost btn-sm", "Back to Contractors" }),
            Card {
                form { class: "grid gap-x-4 md:grid-cols-2", novalidate: true, onsubmit,
                    SelectInput {
                        label: "User",
                        value: draft.user.clone(),
                        options,
                        placeholder: "Select a user",
                        error: form.error("user"),
                        required: true,
                        disabled: users.read().is_none(),
                        onchange: move |v| form.edit("user", |d| d.user = v),
                    }
                    TextInput {
                        label: "Company Name",
                        value: draft.company_name.clone(),
                        error: form.error("companyName"),
                        required: true,
                        oninput: move |v| form.edit("companyName", |d| d.company_name = v),
                    }
                    SelectInput {
                        label: "Contractor Type",
                        value: draft.contractor_type.clone(),
                        options: choice_options::<ContractorType>(),
                        placeholder: "Select contractor type",
                        error: form.error("contractorType"),
                        required: true,
                        onchange: move |v| form.edit("contractorType", |d| d.contractor_type = v),
                    }
                    SelectInput {
                        label: "Payment Terms",
                        value: draft.payment_terms.clone(),
                        options: choice_options::<PaymentTerms>(),
                        placeholder: "Select payment terms",
                        error: form.error("paymentTerms"),
                        required: true,
                        onchange: move |v| form.edit("paymentTerms", |d| d.payment_terms = v),
                    }
                    TextInput {
                        label: "Phone Number",
                        kind: "tel",
                        value: draft.phone_number.clone(),
                        error: form.error("phoneNumber"),
                        placeholder: "0300 1234567",
                        oninput: move |v| form.edit("phoneNumber", |d| d.phone_number = v),
                    }
                    TextInput {
                        label: "Bank Details",
                        value: draft.bank_details.clone(),
                        error: form.error("bankDetails"),
                        oninput: move |v| form.edit("bankDetails", |d| d.bank_details = v),
                    }
                    div { class: "md:col-span-2",
                        TextArea {
                            label: "Address",
                            value: draft.address.clone(),
                            error: form.error("address"),
                            oninput: move |v| form.edit("address", |d| d.address = v),
                        }
                    }
                    FormActions {
                        submitting: form.is_submitting(),
                        label: "Create Contractor",
                        onreset: move |_| form.reset(ContractorDraft::default()),
                    }
                }
            }
        }
    )
}
