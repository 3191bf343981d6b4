use dioxus::prelude::*;

use crate::{
    api::load_failed,
    client::{
        components::{Card, FormActions, Page, SelectInput, TextInput},
        router::Route,
        store::{use_api, Toaster},
        util::{today, use_form},
    },
    form::material::MaterialDraft,
    format::format_pkr_str,
};

#[component]
pub fn AddMaterialPayment() -> Element {
    let api = use_api();
    let toaster = use_context::<Toaster>();
    let form = use_form(|| MaterialDraft::dated(today()));

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
        let Some(material) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().create_material_payment(&material).await {
                Ok(()) => {
                    toaster.success("Material payment created successfully!");
                    form.reset(MaterialDraft::dated(today()));
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

    rsx!(
        document::Title { "Add Material Payment | Urban Design & Construction" }
        Page {
            title: "Add Material Payment",
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
                    TextInput {
                        label: "Date",
                        kind: "date",
                        value: draft.date.clone(),
                        error: form.error("date"),
                        required: true,
                        oninput: move |v| form.edit("date", |d| d.date = v),
                    }
                    TextInput {
                        label: "Material Detail",
                        value: draft.material_detail.clone(),
                        placeholder: "e.g. Cement, 50kg bags",
                        oninput: move |v| form.edit("materialDetail", |d| d.material_detail = v),
                    }
                    TextInput {
                        label: "Material Provider",
                        value: draft.material_provider.clone(),
                        oninput: move |v| form.edit("materialProvider", |d| d.material_provider = v),
                    }
                    TextInput {
                        label: "Quantity",
                        kind: "number",
                        value: draft.quantity.clone(),
                        error: form.error("MaterialQuantity"),
                        oninput: move |v| form.edit("MaterialQuantity", |d| d.set_quantity(v)),
                    }
                    TextInput {
                        label: "Rate",
                        kind: "number",
                        value: draft.rate.clone(),
                        error: form.error("MaterialRate"),
                        oninput: move |v| form.edit("MaterialRate", |d| d.set_rate(v)),
                    }
                    div { class: "md:col-span-2",
                        TextInput {
                            label: "Total Amount",
                            kind: "number",
                            value: draft.total_amount.clone(),
                            error: form.error("totalAmount"),
                            required: true,
                            oninput: move |v| form.edit("totalAmount", |d| d.total_amount = v),
                        }
                        p { class: "text-sm font-semibold", {format_pkr_str(&draft.total_amount)} }
                    }
                    FormActions {
                        submitting: form.is_submitting(),
                        label: "Create Material Payment",
                        onreset: move |_| form.reset(MaterialDraft::dated(today())),
                    }
                }
            }
        }
    )
}
