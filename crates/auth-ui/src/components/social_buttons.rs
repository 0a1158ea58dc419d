//! Inert third-party sign-in buttons
//!
//! The provider buttons are presentational only; nothing is wired to them.

use crate::styles::{DIVIDER_RULE, DIVIDER_TEXT, SOCIAL_BUTTON};
use yew::prelude::*;

#[function_component(SocialButtons)]
pub fn social_buttons() -> Html {
    html! {
        <>
            <div class="flex items-center justify-center space-x-4">
                <hr class={DIVIDER_RULE} />
                <span class={DIVIDER_TEXT}>{"or"}</span>
                <hr class={DIVIDER_RULE} />
            </div>

            <div class="flex space-x-4">
                <button type="button" class={SOCIAL_BUTTON}>
                    <img src="/google-icon.svg" alt="Google" class="w-5 h-5 mr-2" />
                </button>
                <button type="button" class={SOCIAL_BUTTON}>
                    <img src="/facebook-icon.svg" alt="Facebook" class="w-5 h-5 mr-2" />
                </button>
            </div>
        </>
    }
}
