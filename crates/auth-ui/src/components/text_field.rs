//! Labeled controlled text input

use crate::styles::{INPUT, LABEL};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    /// DOM id, also used as the label's `for` target
    pub id: AttrValue,
    pub label: AttrValue,
    /// `type` attribute of the input (`email`, `password`, ...)
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: String,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    html! {
        <div>
            <label for={props.id.clone()} class={LABEL}>
                {props.label.clone()}
            </label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                class={INPUT}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                required=true
            />
        </div>
    }
}
