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
    form::client::ClientDraft,
    listing::{ClientSortKey, ListState},
    model::{
        api::{Reference, UserRefDto},
        enums::PaymentTerms,
    },
};

#[component]
pub fn ClientList() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let mut state = use_signal(ListState::<ClientSortKey>::default);

    let clients = use_resource(move || async move {
        api().list_clients().await.unwrap_or_else(|e| {
            toaster.error(e.to_string());
            Vec::new()
        })
    });

    rsx!(
        document::Title { "Clients | Urban Design & Construction" }
        Page {
            title: "Clients",
            actions: rsx!(Link { to: Route::AddClient {}, class: "btn btn-primary btn-sm", "Add Client" }),
            Card {
                SearchBox {
                    value: state.read().search().to_string(),
                    placeholder: "Search by name, email, phone or address",
                    oninput: move |v: String| state.write().set_search(v),
                }
                match &*clients.read_unchecked() {
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
                                                label: "Name",
                                                direction: state.read().direction_of(ClientSortKey::Name),
                                                onclick: move |_| state.write().toggle_sort(ClientSortKey::Name),
                                            }
                                            th { "Email" }
                                            th { "Phone" }
                                            SortHeader {
                                                label: "Payment Terms",
                                                direction: state.read().direction_of(ClientSortKey::PaymentTerms),
                                                onclick: move |_| state.write().toggle_sort(ClientSortKey::PaymentTerms),
                                            }
                                            th { "Address" }
                                            th { "Status" }
                                        }
                                    }
                                    tbody {
                                        if page.rows.is_empty() {
                                            tr { td { colspan: 6, class: "text-center opacity-70", "No clients found" } }
                                        }
                                        for client in page.rows.iter() {
                                            tr { key: "{client.id}",
                                                td { {name_of(&client.user)} }
                                                td { {email_of(&client.user)} }
                                                td { {dash(&client.phone_number)} }
                                                td { {dash(&client.payment_terms)} }
                                                td { {dash(&client.address)} }
                                                td {
                                                    if client.is_active {
                                                        span { class: "badge badge-success", "Active" }
                                                    } else {
                                                        span { class: "badge badge-ghost", "Inactive" }
                                                    }
                                                }
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

fn name_of(user: &Reference<UserRefDto>) -> String {
    match user {
        Reference::Populated(user) => user.user_name.clone(),
        Reference::Id(id) => id.clone(),
    }
}

fn email_of(user: &Reference<UserRefDto>) -> String {
    user.populated()
        .map(|u| u.email.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn AddClient() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let form = use_form(ClientDraft::default);

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
        let Some(client) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().create_client(&client).await {
                Ok(()) => {
                    toaster.success("Client created successfully!");
                    form.reset(ClientDraft::default());
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    let options = users.read().as_deref().map(user_options).unwrap_or_default();
    let draft = form.draft.read();

    rsx!(
        document::Title { "Add Client | Urban Design & Construction" }
        Page {
            title: "Add Client",
            actions: rsx!(Link { to: Route::ClientList {}, class: "btn btn-ghost btn-sm", "Back to Clients" }),
            Card {
                form { class: "grid gap-x-4 md:grid-cols-2", novalidate: true, onsubmit,
                    SelectInput {
                        label: "User",
                        value: draft.user.clone(),
                        options: options,
                        placeholder: "Select a user",
                        error: form.error("user"),
                        required: true,
                        disabled: users.read().is_none(),
                        onchange: move |v| form.edit("user", |d| d.user = v),
                    }
                    SelectInput {
                        label: "Payment Terms",
                        value: draft.payment_terms.clone(),
                        options: choice_options::<PaymentTerms>(),
                        placeholder: "Select payment terms",
                        error: form.error("paymentTerms"),
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
                    FormActions { submitting: form.is_submitting(), label: "Create Client", onreset: move |_| form.reset(ClientDraft::default()) }
                }
            }
        }
    )
}
