use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPrint;
use dioxus_free_icons::Icon;
use futures::future::try_join;

use crate::{
    api::load_failed,
    client::{
        components::{
            choice_options, Card, FormActions, Page, Pagination, SearchBox, SelectInput, TextArea,
            TextInput,
        },
        router::Route,
        store::{use_api, Toaster},
        util::{dash, print_html, today, use_form},
    },
    form::contract::ContractDraft,
    format::{display_date, format_pkr, format_pkr_str, ledger_class, payment_status_class},
    listing::{ListState, ProjectSortKey},
    model::{
        contract::ContractDto,
        contractor::ContractorDto,
        enums::{Choice, ContractType},
        project::ProjectDto,
    },
    report::{render_contract_receipt, PrintMeta},
};

#[derive(Clone, Default, PartialEq)]
struct Prerequisites {
    projects: Vec<ProjectDto>,
    contractors: Vec<ContractorDto>,
}

#[component]
pub fn AddContract() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let form = use_form(ContractDraft::default);

    let prerequisites = use_resource(move || async move {
        let client = api();
        match try_join(client.list_projects(), client.list_contractors())
            .await
            .map_err(load_failed)
        {
            Ok((projects, contractors)) => {
                if projects.is_empty() {
                    toaster.info("No projects found. Please create projects first.");
                } else if contractors.is_empty() {
                    toaster.info("No contractors found. Please add contractors first.");
                }
                Prerequisites { projects, contractors }
            }
            Err(e) => {
                toaster.error(e.to_string());
                Prerequisites::default()
            }
        }
    });

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(contract) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().create_contract(&contract).await {
                Ok(()) => {
                    toaster.success("Project contract created successfully!");
                    form.reset(ContractDraft::default());
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    type Options = Vec<(String, String)>;
    let (project_options, contractor_options): (Options, Options) = match &*prerequisites.read() {
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
        ),
        None => (Vec::new(), Vec::new()),
    };
    let loading = prerequisites.read().is_none();
    let draft = form.draft.read();

    rsx!(
        document::Title { "Add Project Contract | Urban Design & Construction" }
        Page {
            title: "Add Project Contract",
            actions: rsx!(Link { to: Route::ContractPayments {}, class: "btn btn-ghost btn-sm", "Back to Contracts" }),
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
                        label: "Contractor",
                        value: draft.contractor.clone(),
                        options: contractor_options,
                        placeholder: "Select a contractor",
                        error: form.error("contractor"),
                        required: true,
                        disabled: loading,
                        onchange: move |v| form.edit("contractor", |d| d.contractor = v),
                    }
                    SelectInput {
                        label: "Contract Type",
                        value: draft.contract_type.clone(),
                        options: choice_options::<ContractType>(),
                        placeholder: "Select a contract type",
                        error: form.error("contractType"),
                        onchange: move |v| form.edit("contractType", |d| d.contract_type = v),
                    }
                    div {
                        TextInput {
                            label: "Total Amount",
                            kind: "number",
                            value: draft.total_amount.clone(),
                            error: form.error("totalAmount"),
                            required: true,
                            oninput: move |v| form.edit("totalAmount", |d| d.total_amount = v),
                        }
                        p { class: "text-xs opacity-70", {format_pkr_str(&draft.total_amount)} }
                    }
                    TextInput {
                        label: "Start Date",
                        kind: "date",
                        value: draft.start_date.clone(),
                        error: form.error("startDate"),
                        required: true,
                        oninput: move |v| form.edit("startDate", |d| d.start_date = v),
                    }
                    TextInput {
                        label: "End Date",
                        kind: "date",
                        value: draft.end_date.clone(),
                        error: form.error("endDate"),
                        oninput: move |v| form.edit("endDate", |d| d.end_date = v),
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
                        label: "Create Contract",
                        onreset: move |_| form.reset(ContractDraft::default()),
                    }
                }
            }
        }
    )
}

/// Where the contract payments browser currently is
#[derive(Clone, Debug, PartialEq)]
enum BrowserView {
    Projects,
    Contracts { project_id: String, project_name: String },
    Summary { project_id: String, project_name: String, contract_id: String },
}

/// Projects, then a project's contracts, then one contract's payments
#[component]
pub fn ContractPayments() -> Element {
    let mut view = use_signal(|| BrowserView::Projects);

    rsx!(
        document::Title { "Project Contracts | Urban Design & Construction" }
        match view() {
            BrowserView::Projects => rsx!(
                ProjectPicker {
                    title: "Project Contracts",
                    action: "View Contracts",
                    onselect: move |p: ProjectDto| view.set(BrowserView::Contracts {
                        project_id: p.id,
                        project_name: p.name,
                    }),
                }
            ),
            BrowserView::Contracts { project_id, project_name } => rsx!(
                ContractsOfProject {
                    project_id: project_id.clone(),
                    project_name: project_name.clone(),
                    onback: move |_| view.set(BrowserView::Projects),
                    onselect: move |contract_id: String| view.set(BrowserView::Summary {
                        project_id: project_id.clone(),
                        project_name: project_name.clone(),
                        contract_id,
                    }),
                }
            ),
            BrowserView::Summary { project_id, project_name, contract_id } => rsx!(
                ContractSummary {
                    contract_id,
                    onback: move |_| view.set(BrowserView::Contracts {
                        project_id: project_id.clone(),
                        project_name: project_name.clone(),
                    }),
                }
            ),
        }
    )
}

/// Searchable, paginated project list with one action per row
#[component]
pub(crate) fn ProjectPicker(title: &'static str, action: &'static str, onselect: EventHandler<ProjectDto>) -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let mut state = use_signal(ListState::<ProjectSortKey>::default);

    let projects = use_resource(move || async move {
        match api().list_projects().await {
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

    rsx!(
        Page { title,
            Card {
                SearchBox {
                    value: state.read().search().to_string(),
                    placeholder: "Search projects by name or code",
                    oninput: move |v: String| state.write().set_search(v),
                }
                match &*projects.read_unchecked() {
                    None => rsx!(div { class: "skeleton h-32 w-full" }),
                    Some(rows) => {
                        let page = state.read().apply(rows);
                        let (current, total_pages) = (page.page, page.total_pages);
                        rsx!(
                            div { class: "grid gap-3 md:grid-cols-2 xl:grid-cols-3",
                                if page.rows.is_empty() {
                                    p { class: "opacity-70", "No projects found" }
                                }
                                for project in page.rows.iter() {
                                    ProjectCard {
                                        key: "{project.id}",
                                        project: (*project).clone(),
                                        action,
                                        onselect: move |p| onselect.call(p),
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
fn ContractsOfProject(
    project_id: String,
    project_name: String,
    onback: EventHandler<()>,
    onselect: EventHandler<String>,
) -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();

    let contracts = use_resource(move || {
        let project_id = project_id.clone();
        async move {
            api().contracts_by_project(&project_id).await.unwrap_or_else(|e| {
                toaster.error(e.to_string());
                Vec::new()
            })
        }
    });

    rsx!(
        Page {
            title: project_name,
            subtitle: "Contracts",
            actions: rsx!(button { class: "btn btn-ghost btn-sm", onclick: move |_| onback.call(()), "Back to Projects" }),
            match &*contracts.read_unchecked() {
                None => rsx!(div { class: "skeleton h-32 w-full" }),
                Some(contracts) if contracts.is_empty() => rsx!(
                    Card { p { class: "opacity-70", "No contracts found for this project" } }
                ),
                Some(contracts) => rsx!(
                    div { class: "grid gap-3 md:grid-cols-2",
                        for contract in contracts.iter() {
                            ContractCard {
                                key: "{contract.id}",
                                contract: contract.clone(),
                                onselect: move |id| onselect.call(id),
                            }
                        }
                    }
                ),
            }
        }
    )
}

#[component]
fn ProjectCard(project: ProjectDto, action: &'static str, onselect: EventHandler<ProjectDto>) -> Element {
    let selected = project.clone();

    rsx!(
        div { class: "card card-border bg-base-100",
            div { class: "card-body p-4",
                h3 { class: "font-semibold", "{project.name}" }
                p { class: "text-sm opacity-70", {dash(&project.project_code)} }
                p { class: "text-sm", {dash(&project.location)} }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| onselect.call(selected.clone()),
                        "{action}"
                    }
                }
            }
        }
    )
}

#[component]
fn ContractCard(contract: ContractDto, onselect: EventHandler<String>) -> Element {
    let id = contract.id.clone();
    let payments = format!("{} payment(s)", contract.payments.len());

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body p-4 gap-1",
                div { class: "flex justify-between items-start",
                    h3 { class: "font-semibold", "{contract.contractor.company_name}" }
                    if contract.is_terminated {
                        span { class: "badge badge-error", "Terminated" }
                    }
                }
                p { class: "text-sm", {contract_type_label(&contract.contract_type)} }
                p { class: "text-lg font-bold", {format_pkr(contract.total_amount)} }
                p { class: "text-xs opacity-70",
                    {display_date(&contract.start_date)}
                    " to "
                    {display_date(contract.end_date.as_deref().unwrap_or_default())}
                }
                p { class: "text-xs opacity-70", "{payments}" }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| onselect.call(id.clone()),
                        "View Payments"
                    }
                }
            }
        }
    )
}

fn contract_type_label(raw: &str) -> String {
    crate::form::parse_choice::<ContractType>(raw)
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| dash(raw))
}

#[component]
fn ContractSummary(contract_id: String, onback: EventHandler<()>) -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();

    let summary = use_resource(move || {
        let contract_id = contract_id.clone();
        async move {
            api()
                .contract_summary(&contract_id)
                .await
                .map_err(|e| toaster.error(e.to_string()))
                .ok()
        }
    });

    let loaded = summary.read().as_ref().cloned();

    rsx!(
        match loaded {
            Some(None) => rsx!(
                Page { title: "Contract Payments",
                    actions: rsx!(button { class: "btn btn-ghost btn-sm", onclick: move |_| onback.call(()), "Back to Contracts" }),
                    Card { p { class: "opacity-70", "The payment summary could not be loaded." } }
                }
            ),
            None => rsx!(
                Page { title: "Contract Payments",
                    actions: rsx!(button { class: "btn btn-ghost btn-sm", onclick: move |_| onback.call(()), "Back to Contracts" }),
                    div { class: "skeleton h-32 w-full" }
                }
            ),
            Some(Some(summary)) => {
                let printable = summary.clone();
                rsx!(
                    Page {
                        title: summary.contractor_name.clone(),
                        subtitle: format!("{} · {}", summary.project_name, contract_type_label(&summary.contract_type)),
                        actions: rsx!(
                            button { class: "btn btn-ghost btn-sm", onclick: move |_| onback.call(()), "Back to Contracts" }
                            button {
                                class: "btn btn-primary btn-sm flex gap-2",
                                onclick: move |_| print_html(&render_contract_receipt(&printable, &PrintMeta::now())),
                                Icon { width: 14, height: 14, icon: FaPrint }
                                "Print Summary"
                            }
                        ),
                        div { class: "stats stats-vertical md:stats-horizontal shadow-sm bg-base-100",
                            div { class: "stat",
                                div { class: "stat-title", "Contract Amount" }
                                div { class: "stat-value text-lg", {format_pkr(summary.total_amount)} }
                            }
                            div { class: "stat",
                                div { class: "stat-title", "Total Payments" }
                                div { class: "stat-value text-lg text-error", {format_pkr(summary.total_payments)} }
                            }
                            div { class: "stat",
                                div { class: "stat-title", "Net Amount" }
                                div {
                                    class: if summary.net >= 0.0 { "stat-value text-lg text-success" } else { "stat-value text-lg text-error" },
                                    {format_pkr(summary.net)}
                                }
                            }
                        }
                        Card { title: "Payment Details",
                            if summary.payments.is_empty() {
                                p { class: "opacity-70", "No payments found for this contract" }
                            } else {
                                div { class: "overflow-x-auto",
                                    table { class: "table table-sm",
                                        thead {
                                            tr {
                                                th { "Date" }
                                                th { "Type" }
                                                th { "Amount" }
                                                th { "Method" }
                                                th { "Status" }
                                                th { "Transaction ID" }
                                                th { "Description" }
                                                th { "Created By" }
                                            }
                                        }
                                        tbody {
                                            for payment in summary.payments.iter() {
                                                tr { key: "{payment.id}",
                                                    td { {display_date(&payment.date)} }
                                                    td { class: ledger_class(payment.kind.value()), {payment.kind.value().to_uppercase()} }
                                                    td { class: "font-semibold", {format_pkr(payment.amount)} }
                                                    td { {dash(&payment.payment_method)} }
                                                    td { span { class: payment_status_class(&payment.status), "{payment.status}" } }
                                                    td { {dash(payment.transaction_id.as_deref().unwrap_or_default())} }
                                                    td { {dash(payment.work_description.as_deref().unwrap_or_default())} }
                                                    td { {payment.creator_name().unwrap_or("N/A").to_string()} }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                )
            }
        }
    )
}
