//! Login page

use portico_auth_ui::{styles::PAGE_SHELL, AuthForm, AuthMode};
use yew::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <div class={PAGE_SHELL}>
            <AuthForm mode={AuthMode::Login} />
        </div>
    }
}
