use dioxus::prelude::*;

use crate::client::{
    components::DashboardLayout,
    routes::{
        auth::{Login, Signup},
        clients::{AddClient, ClientList},
        contractors::{AddContractor, ContractorList},
        contracts::{AddContract, ContractPayments},
        dashboard::Dashboard,
        payments::{
            AddContractorPayment, AddMaterialPayment, AddProjectPayment, PaymentSelect,
            PaymentSummary,
        },
        placeholder::{Reports, Settings},
        projects::{AddProject, ProjectList},
        users::{AddUser, UserList},
        NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]

    #[route("/login")]
    Login {},

    #[route("/signup")]
    Signup {},

    #[nest("/dashboard")]

        #[layout(DashboardLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/contractors")]
        ContractorList {},

        #[route("/contractors/add")]
        AddContractor {},

        #[route("/clients")]
        ClientList {},

        #[route("/clients/add")]
        AddClient {},

        #[route("/projects")]
        ProjectList {},

        #[route("/projects/add")]
        AddProject {},

        #[route("/project-contracts")]
        ContractPayments {},

        #[route("/project-contracts/add")]
        AddContract {},

        #[route("/payments")]
        PaymentSummary {},

        #[route("/payments/add")]
        PaymentSelect {},

        #[route("/payments/contractor")]
        AddContractorPayment {},

        #[route("/payments/material")]
        AddMaterialPayment {},

        #[route("/payments/project")]
        AddProjectPayment {},

        #[route("/users")]
        UserList {},

        #[route("/users/add")]
        AddUser {},

        #[route("/reports")]
        Reports {},

        #[route("/settings")]
        Settings {},

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
