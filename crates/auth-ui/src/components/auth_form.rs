//! The shared login/signup form

use crate::components::{SocialButtons, TextField};
use crate::styles::{CARD, FOOTER_LINK, FOOTER_TEXT, HEADING, SUBMIT_BUTTON};
use crate::types::{AuthMode, Credentials};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    /// Whether the form operates as a login or a signup form
    pub mode: AuthMode,
    /// Optional callback invoked with the captured field values on submit
    #[prop_or_default]
    pub on_submit: Option<Callback<Credentials>>,
}

/// Authentication form component.
///
/// Renders email and password inputs, plus a confirm-password input in
/// signup mode. Submission prevents the default browser navigation and
/// emits `on_submit` when one is provided; no validation is performed.
#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_confirm_password_input = {
        let confirm_password = confirm_password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            confirm_password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let mode = props.mode;
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("auth form submitted in {mode:?} mode");

            // TODO: wire this up to an authentication service once one exists
            if let Some(on_submit) = &on_submit {
                on_submit.emit(Credentials {
                    email: (*email).clone(),
                    password: (*password).clone(),
                    confirm_password: mode
                        .is_signup()
                        .then(|| (*confirm_password).clone()),
                });
            }
        })
    };

    html! {
        <div class={CARD}>
            <div class="flex items-center mb-8">
                <div class="w-10 h-10 flex items-center justify-center">
                    <div class="w-8 h-8 bg-blue-600 rounded-full"></div>
                    <div class="w-8 h-8 bg-blue-300 rounded-full -ml-4"></div>
                </div>
                <h2 class={HEADING}>{props.mode.heading()}</h2>
            </div>

            <form {onsubmit} class="space-y-6">
                <TextField
                    id="email"
                    label="Email Address"
                    input_type="email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />

                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                />

                {if props.mode.is_signup() {
                    html! {
                        <TextField
                            id="confirmPassword"
                            label="Confirm Password"
                            input_type="password"
                            value={(*confirm_password).clone()}
                            oninput={on_confirm_password_input}
                        />
                    }
                } else {
                    html! {}
                }}

                <button type="submit" class={SUBMIT_BUTTON}>
                    {props.mode.submit_label()}
                </button>

                <SocialButtons />

                <p class={FOOTER_TEXT}>
                    {props.mode.footer_prompt()}
                    {" "}
                    <a href={props.mode.footer_link_href()} class={FOOTER_LINK}>
                        {props.mode.footer_link_label()}
                    </a>
                </p>
            </form>
        </div>
    }
}
