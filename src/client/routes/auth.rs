use dioxus::prelude::*;

use crate::{
    client::{
        components::TextInput,
        router::Route,
        store::{use_api, AuthState, Toaster},
        util::{today, use_form},
    },
    form::auth::{LoginDraft, SignupDraft},
};

#[component]
fn AuthCard(title: &'static str, subtitle: &'static str, children: Element) -> Element {
    rsx!(
        div { class: "min-h-screen flex items-center justify-center bg-base-200 p-4",
            div { class: "card bg-base-100 shadow-md w-full max-w-md",
                div { class: "card-body",
                    p { class: "text-sm font-semibold text-primary", "Urban Design & Construction" }
                    h1 { class: "card-title text-2xl", "{title}" }
                    p { class: "text-sm opacity-70 mb-2", "{subtitle}" }
                    {children}
                }
            }
        }
    )
}

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthState>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let api = use_api();
    let form = use_form(LoginDraft::default);

    use_effect(move || {
        if auth.is_signed_in() {
            navigator.replace(Route::Dashboard {});
        }
    });

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(credentials) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().login(&credentials).await {
                Ok(session) => {
                    auth.sign_in(session);
                    toaster.success("Login successful!");
                    navigator.replace(Route::Dashboard {});
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    let draft = form.draft.read();

    rsx!(
        document::Title { "Login | Urban Design & Construction" }
        AuthCard { title: "Sign in", subtitle: "Enter your credentials to access the console.",
            form { class: "flex flex-col gap-2", novalidate: true, onsubmit,
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
                button {
                    class: "btn btn-primary mt-2",
                    r#type: "submit",
                    disabled: form.is_submitting(),
                    if form.is_submitting() { "Signing in..." } else { "Sign in" }
                }
            }
            p { class: "text-sm text-center mt-2",
                "No account yet? "
                Link { to: Route::Signup {}, class: "link link-primary", "Create one" }
            }
        }
    )
}

#[component]
pub fn Signup() -> Element {
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let api = use_api();
    let form = use_form(SignupDraft::default);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(user) = form.validate(today(), toaster) else {
            return;
        };
        spawn(async move {
            form.set_submitting(true);
            match api().register(&user).await {
                Ok(()) => {
                    toaster.success("Registration successful! Please sign in.");
                    navigator.push(Route::Login {});
                }
                Err(e) => toaster.error(e.to_string()),
            }
            form.set_submitting(false);
        });
    };

    let draft = form.draft.read();

    rsx!(
        document::Title { "Sign up | Urban Design & Construction" }
        AuthCard { title: "Create account", subtitle: "Register to start managing projects.",
            form { class: "flex flex-col gap-2", novalidate: true, onsubmit,
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
                button {
                    class: "btn btn-primary mt-2",
                    r#type: "submit",
                    disabled: form.is_submitting(),
                    if form.is_submitting() { "Creating account..." } else { "Create account" }
                }
            }
            p { class: "text-sm text-center mt-2",
                "Already registered? "
                Link { to: Route::Login {}, class: "link link-primary", "Sign in" }
            }
        }
    )
}
