//! Browser rendering tests for the page wrappers.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use portico_frontend::{LoginPage, SignUpPage};
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::BaseComponent;

wasm_bindgen_test_configure!(run_in_browser);

async fn render<C>() -> Element
where
    C: BaseComponent<Properties = ()>,
{
    console_error_panic_hook::set_once();

    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    yew::Renderer::<C>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;
    root
}

#[wasm_bindgen_test]
async fn login_page_mounts_the_form_in_login_mode() {
    let root = render::<LoginPage>().await;

    assert_eq!(root.query_selector_all("input").unwrap().length(), 2);
    assert_eq!(
        root.query_selector("h2")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap(),
        "Log in"
    );
}

#[wasm_bindgen_test]
async fn signup_page_mounts_the_form_in_signup_mode() {
    let root = render::<SignUpPage>().await;

    assert_eq!(root.query_selector_all("input").unwrap().length(), 3);
    assert_eq!(
        root.query_selector("h2")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap(),
        "Sign Up"
    );
}
