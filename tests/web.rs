//! Browser test for the mounted application shell.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use navshell::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn nav_rows() -> Vec<(String, String)> {
    let rows = document()
        .query_selector_all("[data-title]")
        .expect("valid selector");
    (0..rows.length())
        .filter_map(|i| rows.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|el| {
            (
                el.get_attribute("data-title").unwrap_or_default(),
                el.get_attribute("data-active").unwrap_or_default(),
            )
        })
        .collect()
}

#[wasm_bindgen_test]
fn test_initial_render() {
    mount_to_body(App);

    let rows = nav_rows();
    let titles: Vec<_> = rows.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Home", "Sales", "Costs", "Payments", "Finances", "Messages", "Settings", "Support"]
    );
    for (title, active) in &rows {
        assert_eq!(active == "true", title == "Home", "row {title}");
    }

    let shell = document()
        .query_selector("[data-theme]")
        .expect("valid selector")
        .expect("app container rendered");
    assert_eq!(shell.get_attribute("data-theme").as_deref(), Some("light"));

    let body = document().body().expect("body").text_content().unwrap_or_default();
    assert!(body.contains("Dark Mode"));
    assert!(body.contains("TensorFlow"));
}
