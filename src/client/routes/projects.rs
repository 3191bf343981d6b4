use dioxus::prelude::*;
use futures::future::try_join;

use crate::{
    api::load_failed,
    client::{
        components::{
            choice_options, Card, FormActions, Page, Pagination, SearchBox, SelectInput, SortHeader,
            TextArea, TextInput,
        },
        router::Route,
        store::{use_api, Toaster},
        util::{dash, today, use_form},
    },
    form::{parse_choice, project::ProjectDraft},
    format::{display_date, format_pkr, format_pkr_str, project_status_class},
    listing::{ListState, ProjectSortKey},
    model::{
        client::ClientDto,
        contractor::ContractorDto,
        enums::{Choice, ProjectCategory, ProjectStatus, ProjectType},
    },
};

#[component]
pub fn ProjectList() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let mut state = use_signal(ListState::<ProjectSortKey>::default);

    let projects = use_resource(move || async move {
        api().list_projects().await.unwrap_or_else(|e| {
            toaster.error(e.to_string());
            Vec::new()
        })
    });

    rsx!(
        document::Title { "Projects | Urban Design & Construction" }
        Page {
            title: "Projects",
            actions: rsx!(Link { to: Route::AddProject {}, class: "btn btn-primary btn-sm", "Add Project" }),
            Card {
                SearchBox {
                    value: state.read().search().to_string(),
                    placeholder: "Search by name or code",
                    oninput: move |v: String| state.write().set_search(v),
                }
                match &*projects.read_unchecked() {
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
                                                direction: state.read().direction_of(ProjectSortKey::Name),
                                                onclick: move |_| state.write().toggle_sort(ProjectSortKey::Name),
                                            }
                                            SortHeader {
                                                label: "Code",
                                                direction: state.read().direction_of(ProjectSortKey::Code),
                                                onclick: move |_| state.write().toggle_sort(ProjectSortKey::Code),
                                            }
                                            th { "Customer" }
                                            th { "Location" }
                                            th { "Type" }
                                            SortHeader {
                                                label: "Status",
                                                direction: state.read().direction_of(ProjectSortKey::Status),
                                                onclick: move |_| state.write().toggle_sort(ProjectSortKey::Status),
                                            }
                                            SortHeader {
                                                label: "Cost",
                                                direction: state.read().direction_of(ProjectSortKey::Cost),
                                                onclick: move |_| state.write().toggle_sort(ProjectSortKey::Cost),
                                            }
                                            th { "Start Date" }
                                        }
                                    }
                                    tbody {
                                        if page.rows.is_empty() {
                                            tr { td { colspan: 8, class: "text-center opacity-70", "No projects found" } }
                                        }
                                        for project in page.rows.iter() {
                                            tr { key: "{project.id}",
                                                td { class: "font-medium", "{project.name}" }
                                                td { {dash(&project.project_code)} }
                                                td { {dash(project.customer_name().unwrap_or_default())} }
                                                td { {dash(&project.location)} }
                                                td { {type_label(&project.project_type)} }
                                                td {
                                                    span { class: project_status_class(&project.status), {status_label(&project.status)} }
                                                }
                                                td { {project.headline_cost().map(format_pkr).unwrap_or_else(|| "-".to_string())} }
                                                td { {display_date(project.start_date.as_deref().unwrap_or_default())} }
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

fn type_label(raw: &str) -> String {
    parse_choice::<ProjectType>(raw)
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| dash(raw))
}

fn status_label(raw: &str) -> String {
    parse_choice::<ProjectStatus>(raw)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| dash(raw))
}

#[derive(Clone, Default, PartialEq)]
struct Prerequisites {
    clients: Vec<ClientDto>,
    contractors: Vec<ContractorDto>,
}

#[component]
pub fn AddProject() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let form = use_form(ProjectDraft::default);

    let prerequisites = use_resource(move || async move {
        let client = api();
        match try_join(client.list_clients(), client.list_contractors())
            .await
            .map_err(load_failed)
        {
            Ok((clients, contractors)) => {
                if clients.is_empty() {
                    toaster.info("No clients found. Please add clients first.");
                } else if contractors.is_empty() {
                    toaster.info("No contractors found. Please add contractors first.");
                }
                Prerequisites { clients, contractors }
            }
            Err(e) => {
                toaster.error(e.to_string());
                Prerequisites::default()
            }
        }
    });

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(project) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().create_project(&project).await {
                Ok(()) => {
                    toaster.success("Project created successfully!");
                    form.reset(ProjectDraft::default());
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    type Options = Vec<(String, String)>;
    let (client_options, contractor_options): (Options, Options) = match &*prerequisites.read() {
        Some(loaded) => (
            loaded
                .clients
                .iter()
                .map(|c| (c.id.clone(), c.display_name()))
                .collect(),
            loaded
                .contractors
                .iter()
                .map(|c| (c.id.clone(), c.company_name.clone()))
                .collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };

    let draft = form.draft.read();
    let kind = parse_choice::<ProjectType>(&draft.project_type);

    rsx!(
        document::Title { "Add Project | Urban Design & Construction" }
        Page {
            title: "Add Project",
            actions: rsx!(Link { to: Route::ProjectList {}, class: "btn btn-ghost btn-sm", "Back to Projects" }),
            Card {
                form { class: "grid gap-x-4 md:grid-cols-2", novalidate: true, onsubmit,
                    TextInput {
                        label: "Project Name",
                        value: draft.name.clone(),
                        error: form.error("name"),
                        required: true,
                        oninput: move |v| form.edit("name", |d| d.name = v),
                    }
                    SelectInput {
                        label: "Customer",
                        value: draft.customer.clone(),
                        options: client_options,
                        placeholder: "Select a customer",
                        error: form.error("customer"),
                        required: true,
                        disabled: prerequisites.read().is_none(),
                        onchange: move |v| form.edit("customer", |d| d.customer = v),
                    }
                    TextInput {
                        label: "Location",
                        value: draft.location.clone(),
                        error: form.error("location"),
                        required: true,
                        oninput: move |v| form.edit("location", |d| d.location = v),
                    }
                    SelectInput {
                        label: "Project Category",
                        value: draft.project_category.clone(),
                        options: choice_options::<ProjectCategory>(),
                        placeholder: "Select a category",
                        error: form.error("projectCategory"),
                        required: true,
                        onchange: move |v| form.edit("projectCategory", |d| d.project_category = v),
                    }
                    SelectInput {
                        label: "Project Type",
                        value: draft.project_type.clone(),
                        options: choice_options::<ProjectType>(),
                        placeholder: "Select a project type",
                        error: form.error("projectType"),
                        required: true,
                        onchange: move |v| form.edit("projectType", |d| d.set_project_type(v)),
                    }
                    SelectInput {
                        label: "Status",
                        value: draft.status.clone(),
                        options: choice_options::<ProjectStatus>(),
                        placeholder: "Select a status",
                        error: form.error("status"),
                        onchange: move |v| form.edit("status", |d| d.status = v),
                    }
                    TextInput {
                        label: "Total Area (sq ft)",
                        kind: "number",
                        value: draft.total_area.clone(),
                        error: form.error("totalArea"),
                        oninput: move |v| form.edit("totalArea", |d| d.total_area = v),
                    }
                    TextInput {
                        label: "Coverage Area (sq ft)",
                        kind: "number",
                        value: draft.total_coverage_area.clone(),
                        error: form.error("totalCoverageArea"),
                        oninput: move |v| form.edit("totalCoverageArea", |d| d.set_total_coverage_area(v)),
                    }
                    if kind == Some(ProjectType::WithMaterial) {
                        TextInput {
                            label: "Rate per Square Foot",
                            kind: "number",
                            value: draft.rate_per_square_foot.clone(),
                            error: form.error("ratePerSquareFoot"),
                            required: true,
                            oninput: move |v| form.edit("ratePerSquareFoot", |d| d.set_rate_per_square_foot(v)),
                        }
                        CostPreview { label: "Total Cost", value: format_pkr_str(&draft.total_cost) }
                    }
                    if kind == Some(ProjectType::LabourRate) {
                        TextInput {
                            label: "Labour Rate",
                            kind: "number",
                            value: draft.labour_rate.clone(),
                            error: form.error("labouRate"),
                            required: true,
                            oninput: move |v| form.edit("labouRate", |d| d.set_labour_rate(v)),
                        }
                        CostPreview { label: "Total Labour Cost", value: format_pkr_str(&draft.total_labour_cost) }
                    }
                    TextInput {
                        label: "Start Date",
                        kind: "date",
                        value: draft.start_date.clone(),
                        error: form.error("startDate"),
                        oninput: move |v| form.edit("startDate", |d| d.start_date = v),
                    }
                    TextInput {
                        label: "Estimated Completion Date",
                        kind: "date",
                        value: draft.estimated_duration.clone(),
                        error: form.error("estimatedDuration"),
                        oninput: move |v| form.edit("estimatedDuration", |d| d.estimated_duration = v),
                    }
                    div { class: "md:col-span-2",
                        RepeatableField {
                            label: "Contractors",
                            add_label: "Add Contractor",
                            entries: draft.contractors.entries().to_vec(),
                            can_remove: draft.contractors.can_remove(),
                            options: contractor_options,
                            error: form.error("contractors"),
                            onchange: move |(i, v): (usize, String)| form.edit("contractors", |d| d.contractors.set_at(i, v)),
                            onadd: move |_| form.edit("contractors", |d| d.contractors.append()),
                            onremove: move |i| form.edit("contractors", |d| d.contractors.remove_at(i)),
                        }
                    }
                    RepeatableField {
                        label: "Drawings (URLs)",
                        add_label: "Add Drawing",
                        entries: draft.drawings.entries().to_vec(),
                        can_remove: draft.drawings.can_remove(),
                        error: form.error("drawings"),
                        onchange: move |(i, v): (usize, String)| form.edit("drawings", |d| d.drawings.set_at(i, v)),
                        onadd: move |_| form.edit("drawings", |d| d.drawings.append()),
                        onremove: move |i| form.edit("drawings", |d| d.drawings.remove_at(i)),
                    }
                    RepeatableField {
                        label: "Contracts (URLs)",
                        add_label: "Add Contract",
                        entries: draft.contracts.entries().to_vec(),
                        can_remove: draft.contracts.can_remove(),
                        error: form.error("contracts"),
                        onchange: move |(i, v): (usize, String)| form.edit("contracts", |d| d.contracts.set_at(i, v)),
                        onadd: move |_| form.edit("contracts", |d| d.contracts.append()),
                        onremove: move |i| form.edit("contracts", |d| d.contracts.remove_at(i)),
                    }
                    div { class: "md:col-span-2",
                        TextArea {
                            label: "Description",
                            value: draft.description.clone(),
                            error: form.error("description"),
                            oninput: move |v| form.edit("description", |d| d.description = v),
                        }
                    }
                    FormActions {
                        submitting: form.is_submitting(),
                        label: "Create Project",
                        onreset: move |_| form.reset(ProjectDraft::default()),
                    }
                }
            }
        }
    )
}

#[component]
fn CostPreview(label: &'static str, value: String) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            div { class: "input input-bordered w-full bg-base-200 font-semibold",
                if value.is_empty() { "-" } else { "{value}" }
            }
        }
    )
}

/// A growable list of inputs; a select per entry when `options` is given, a URL input otherwise.
#[component]
fn RepeatableField(
    label: &'static str,
    add_label: &'static str,
    entries: Vec<String>,
    can_remove: bool,
    options: Option<Vec<(String, String)>>,
    error: Option<String>,
    onchange: EventHandler<(usize, String)>,
    onadd: EventHandler<()>,
    onremove: EventHandler<usize>,
) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            for (i, value) in entries.into_iter().enumerate() {
                div { class: "flex gap-2 mb-1",
                    if let Some(options) = options.clone() {
                        select {
                            class: "select select-bordered flex-1",
                            onchange: move |e| onchange.call((i, e.value())),
                            option { value: "", selected: value.is_empty(), "Select" }
                            for (option_value, option_label) in options {
                                option {
                                    value: option_value.clone(),
                                    selected: option_value == value,
                                    "{option_label}"
                                }
                            }
                        }
                    } else {
                        input {
                            class: "input input-bordered flex-1",
                            r#type: "url",
                            placeholder: "https://",
                            value: value.clone(),
                            oninput: move |e| onchange.call((i, e.value())),
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        r#type: "button",
                        disabled: !can_remove,
                        onclick: move |_| onremove.call(i),
                        "Remove"
                    }
                }
            }
            button {
                class: "btn btn-outline btn-sm w-fit",
                r#type: "button",
                onclick: move |_| onadd.call(()),
                "{add_label}"
            }
            if let Some(error) = error {
                p { class: "field-error", "{error}" }
            }
        }
    )
}
