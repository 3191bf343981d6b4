use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            choice_options, Card, FormActions, Page, Pagination, SearchBox, SelectInput, SortHeader,
            TextInput,
        },
        router::Route,
        store::{use_api, Toaster},
        util::{dash, today, use_form},
    },
    form::auth::AddUserDraft,
    format::display_date,
    listing::{user_list_state, UserSortKey},
    model::enums::UserRole,
};

#[component]
pub fn UserList() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let mut state = use_signal(user_list_state);

    let users = use_resource(move || async move {
        api().list_users().await.unwrap_or_else(|e| {
            toaster.error(e.to_string());
            Vec::new()
        })
    });

    let header = move |label: &'static str, key: UserSortKey| {
        rsx!(SortHeader {
            label,
            direction: state.read().direction_of(key),
            onclick: move |_| state.write().toggle_sort(key),
        })
    };

    rsx!(
        document::Title { "Users | Urban Design & Construction" }
        Page {
            title: "Users",
            actions: rsx!(Link { to: Route::AddUser {}, class: "btn btn-primary btn-sm", "Add User" }),
            Card {
                SearchBox {
                    value: state.read().search().to_string(),
                    placeholder: "Search by name, email, role or status",
                    oninput: move |v: String| state.write().set_search(v),
                }
                match &*users.read_unchecked() {
                    None => rsx!(div { class: "skeleton h-32 w-full" }),
                    Some(rows) => {
                        let page = state.read().apply(rows);
                        let (current, total_pages) = (page.page, page.total_pages);
                        rsx!(
                            div { class: "overflow-x-auto",
                                table { class: "table table-md",
                                    thead {
                                        tr {
                                            {header("Username", UserSortKey::UserName)}
                                            {header("Email", UserSortKey::Email)}
                                            {header("Role", UserSortKey::Role)}
                                            {header("Status", UserSortKey::Status)}
                                            {header("Created", UserSortKey::CreatedAt)}
                                        }
                                    }
                                    tbody {
                                        if page.rows.is_empty() {
                                            tr { td { colspan: 5, class: "text-center opacity-70", "No users found" } }
                                        }
                                        for user in page.rows.iter() {
                                            tr { key: "{user.id}",
                                                td { class: "font-medium", {dash(&user.user_name)} }
                                                td { {dash(&user.email)} }
                                                td { span { class: "badge badge-outline", {dash(&user.role)} } }
                                                td {
                                                    span {
                                                        class: if user.status.eq_ignore_ascii_case("active") { "badge badge-success" } else { "badge badge-ghost" },
                                                        {dash(&user.status)}
                                                    }
                                                }
                                                td { {display_date(&user.created_at)} }
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
pub fn AddUser() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let form = use_form(AddUserDraft::default);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(user) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().register(&user).await {
                Ok(()) => {
                    toaster.success("User added successfully!");
                    form.reset(AddUserDraft::default());
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    let draft = form.draft.read();

    rsx!(
        document::Title { "Add User | Urban Design & Construction" }
        Page {
            title: "Add User",
            actions: rsx!(Link { to: Route::UserList {}, class: "btn btn-ghost btn-sm", "Back to Users" }),
            Card {
                form { class: "grid gap-x-4 md:grid-cols-2", novalidate: true, onsubmit,
                    TextInput {
                        label: "Username",
                        value: draft.user_name.clone(),
                        error: form.error("userName"),
                        required: true,
                        oninput: move |v| form.edit("userName", |d| d.user_name = v),
                    }
                    TextInput {
                        label: "Email",
                        kind: "email",
                        value: draft.email.clone(),
                        error: form.error("email"),
                        required: true,
                        oninput: move |v| form.edit("email", |d| d.email = v),
                    }
                    TextInput {
                        label: "Password",
                        kind: "password",
                        value: draft.password.clone(),
                        error: form.error("password"),
                        required: true,
                        oninput: move |v| form.edit("password", |d| d.password = v),
                    }
                    SelectInput {
                        label: "Role",
                        value: draft.role.clone(),
                        options: choice_options::<UserRole>(),
                        error: form.error("role"),
                        required: true,
                        onchange: move |v| form.edit("role", |d| d.role = v),
                    }
                    FormActions {
                        submitting: form.is_submitting(),
                        label: "Add User",
                        onreset: move |_| form.reset(AddUserDraft::default()),
                    }
                }
            }
        }
    )
}
