//! Browser tests for request construction
//!
//! Run in a headless browser with wasm-bindgen-test. Nothing is sent over
//! the network; requests are built and inspected.

use docluster_core::{ClusterAssignment, ClusterLabel, FrontendConfig, SearchRequest};
use docluster_wasm::ApiClient;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::File;

wasm_bindgen_test_configure!(run_in_browser);

fn text_file(name: &str, contents: &str) -> File {
    let parts = Array::of1(&JsValue::from_str(contents));
    File::new_with_str_sequence(&parts, name).unwrap()
}

/// Test: one `documents` entry per file, in selection order
#[wasm_bindgen_test]
fn test_upload_form_has_one_entry_per_file() {
    let files = vec![
        text_file("first.txt", "alpha"),
        text_file("second.pdf", "beta"),
        text_file("third.docx", "gamma"),
    ];

    let form = ApiClient::upload_form(&files).unwrap();
    let entries = form.get_all("documents");

    assert_eq!(entries.length(), 3);
    let names: Vec<String> = entries
        .iter()
        .map(|entry| entry.dyn_into::<File>().unwrap().name())
        .collect();
    assert_eq!(names, vec!["first.txt", "second.pdf", "third.docx"]);
}

/// Test: an empty selection yields an empty form
#[wasm_bindgen_test]
fn test_upload_form_empty() {
    let form = ApiClient::upload_form(&[]).unwrap();
    assert_eq!(form.get_all("documents").length(), 0);
}

/// Test: search request targets the configured endpoint with both parameters
#[wasm_bindgen_test]
fn test_search_request_url() {
    let client = ApiClient::new(&FrontendConfig::default());
    let clusters = ClusterAssignment::from(vec![
        ClusterLabel { id: 0, cluster: 1 },
        ClusterLabel { id: 1, cluster: 3 },
    ]);
    let search = SearchRequest::new("foo", Some(&clusters)).unwrap().unwrap();

    let request = client.search_request(&search).unwrap();
    let url = request.url();

    assert!(url.contains("/api/search?query=foo&cluster="));
    let params = web_sys::Url::new_with_base(&url, "http://localhost")
        .unwrap()
        .search_params();
    assert_eq!(params.get("query").as_deref(), Some("foo"));
    assert_eq!(
        params.get("cluster").as_deref(),
        Some(r#"[{"id":0,"cluster":1},{"id":1,"cluster":3}]"#)
    );
    assert_eq!(request.method(), gloo_net::http::Method::GET);
}
