//! Browser checks for the web-sys adapters. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use billed_ui::interop::{LocalSessionStore, WebDocument};
use billed_ui::session::{read_session, SessionStore};
use billed_ui::views::login::login_ui;
use billed_ui::views::RenderContext;
use billed_ui::document::DocumentMount;
use chrono::NaiveDate;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
}

#[wasm_bindgen_test]
fn local_storage_round_trips_session() {
    let store = LocalSessionStore::new().unwrap();
    store.set_item("user", r#"{"type":"Employee","email":"a@a"}"#);
    assert_eq!(read_session(&store, "user").unwrap().email, "a@a");

    store.remove_item("user");
    assert_eq!(store.get_item("user"), None);
}

#[wasm_bindgen_test]
fn mounts_markup_into_root() {
    mount_point("web-test-root");
    let document = WebDocument::new("web-test-root").unwrap();
    let ctx = RenderContext {
        session: None,
        today: NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
    };

    document.mount(&login_ui(&ctx));
    document.set_text("form-employee", "ready");

    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("web-test-root")
        .unwrap();
    assert_eq!(
        root.query_selector(r#"[data-testid="form-employee"]"#)
            .unwrap()
            .unwrap()
            .text_content()
            .as_deref(),
        Some("ready")
    );
}

#[wasm_bindgen_test]
fn missing_mount_point_is_an_error() {
    assert!(WebDocument::new("no-such-root").is_err());
}
