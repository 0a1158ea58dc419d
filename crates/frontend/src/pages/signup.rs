//! Signup page

use portico_auth_ui::{styles::PAGE_SHELL, AuthForm, AuthMode};
use yew::prelude::*;

#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    html! {
        <div class={PAGE_SHELL}>
            <AuthForm mode={AuthMode::Signup} />
        </div>
    }
}
