//! Browser tests for the routed pages. Run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use std::time::Duration;

use frontend::config::Config;
use frontend::pages::config_error::{config_error_message, ConfigError, ConfigErrorProps};
use frontend::{App, AppProps};
use gloo_storage::{LocalStorage, Storage};
use shared::{Identity, SharedError, StageCatalog};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::AppHandle;
use yew_router::history::{BrowserHistory, History};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_at(path: &str) -> (web_sys::Element, AppHandle<App>) {
    gloo_utils::window()
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
    let root = gloo_utils::document().create_element("div").unwrap();
    gloo_utils::body().append_child(&root).unwrap();
    let catalog = Rc::new(StageCatalog::reference().unwrap());
    let handle = yew::Renderer::<App>::with_root_and_props(root.clone(), AppProps { catalog }).render();
    (root, handle)
}

fn current_path() -> String {
    gloo_utils::window().location().pathname().unwrap()
}

#[wasm_bindgen_test]
async fn signed_out_analytics_redirects_to_sign_in() {
    LocalStorage::delete(Config::USER_STORAGE_KEY);
    let (root, handle) = mount_at("/analytics");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(current_path(), "/sign-in");
    let html = root.inner_html();
    for record in StageCatalog::reference().unwrap().records() {
        assert!(!html.contains(&record.short_description));
    }
    handle.destroy();
}

#[wasm_bindgen_test]
async fn signed_in_analytics_reveals_after_delay() {
    LocalStorage::set(Config::USER_STORAGE_KEY, Identity::new("u1", "u1@example.com")).unwrap();
    let (root, handle) = mount_at("/analytics");
    sleep(Duration::from_millis(50)).await;

    assert!(root.inner_html().contains("Processing..."));
    assert_eq!(gloo_utils::document().title(), Config::ANALYTICS_TITLE);

    sleep(Duration::from_millis(u64::from(Config::reveal_delay_ms()) + 200)).await;
    let html = root.inner_html();
    assert!(!html.contains("Processing..."));
    let catalog = StageCatalog::reference().unwrap();
    let record = catalog
        .records()
        .iter()
        .find(|r| html.contains(&r.title))
        .expect("a known stage title should be shown");
    for symptom in &record.symptoms {
        assert!(html.contains(symptom.as_str()));
    }

    handle.destroy();
    LocalStorage::delete(Config::USER_STORAGE_KEY);
}

#[wasm_bindgen_test]
async fn verification_page_sets_title_and_mounts_form() {
    let (root, handle) = mount_at("/verification");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(gloo_utils::document().title(), Config::VERIFICATION_TITLE);
    let html = root.inner_html();
    assert!(html.contains("Verify your email"));
    assert!(html.contains(Config::FONT_CLASS));
    handle.destroy();
}

#[wasm_bindgen_test]
async fn leaving_analytics_before_delay_never_reveals() {
    LocalStorage::set(Config::USER_STORAGE_KEY, Identity::new("u1", "u1@example.com")).unwrap();
    let (root, handle) = mount_at("/analytics");
    sleep(Duration::from_millis(1_000)).await;
    assert!(root.inner_html().contains("Processing..."));

    BrowserHistory::new().push("/verification");
    sleep(Duration::from_millis(u64::from(Config::reveal_delay_ms()) + 200)).await;

    let html = root.inner_html();
    assert!(html.contains("Verify your email"));
    assert!(!html.contains("Short Description:"));
    assert_eq!(current_path(), "/verification");

    handle.destroy();
    LocalStorage::delete(Config::USER_STORAGE_KEY);
}

#[wasm_bindgen_test]
async fn page_title_is_restored_on_unmount() {
    gloo_utils::document().set_title("Before");
    let (_root, handle) = mount_at("/verification");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(gloo_utils::document().title(), Config::VERIFICATION_TITLE);

    handle.destroy();
    sleep(Duration::from_millis(50)).await;
    assert_eq!(gloo_utils::document().title(), "Before");
}

#[wasm_bindgen_test]
async fn config_error_panel_shows_the_cause() {
    let root = gloo_utils::document().create_element("div").unwrap();
    gloo_utils::body().append_child(&root).unwrap();
    let err = StageCatalog::new(Vec::new()).unwrap_err();
    assert!(matches!(err, SharedError::Configuration(_)));

    let handle = yew::Renderer::<ConfigError>::with_root_and_props(
        root.clone(),
        ConfigErrorProps { message: config_error_message(&err).into() },
    )
    .render();
    sleep(Duration::from_millis(50)).await;

    let html = root.inner_html();
    assert!(html.contains("Something went wrong"));
    assert!(html.contains("stage catalog must contain at least one record"));
    handle.destroy();
}
