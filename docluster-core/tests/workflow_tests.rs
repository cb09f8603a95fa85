//! Upload → projection → search, driven through the panel state machines
//!
//! The browser crate wires exactly these transitions to signals; here the
//! HTTP layer is replaced by canned responses.

use docluster_core::{
    assign_placeholder_clusters, partition_selection, ClientError, DocumentBatch, FrontendConfig,
    ScatterLayout, SearchResponse, SearchState, ShellState, UploadState, UPLOAD_FAILURE_MESSAGE,
};
use url::form_urlencoded;

fn fixed_random() -> impl FnMut() -> f64 {
    let draws = [0.1, 0.7, 0.3, 0.95];
    let mut i = 0;
    move || {
        let v = draws[i % draws.len()];
        i += 1;
        v
    }
}

#[test]
fn test_upload_project_and_search() {
    let config = FrontendConfig::default();
    let mut shell = ShellState::default();
    let mut upload = UploadState::default();

    // Two files picked, both acceptable
    let selection = partition_selection(
        vec![("a.txt", "text/plain"), ("b.pdf", "application/pdf")],
        |(name, mime)| (name.to_string(), mime.to_string()),
    );
    assert_eq!(selection.accepted.len(), 2);
    assert!(upload.begin());

    let response = DocumentBatch::from_json(r#"{"embedding": [[0, 0], [1, 1]]}"#);
    if let Some(batch) = upload.finish(response) {
        shell.set_batch(batch);
    }
    assert!(shell.shows_projection());
    assert!(!shell.shows_search());

    // Projection draws two markers and reports two labels
    let batch = shell.batch().cloned().unwrap();
    let layout = ScatterLayout::compute(&batch.embedding, &config.plot).unwrap();
    assert_eq!(layout.points.len(), 2);
    assert_eq!((layout.points[0].cx, layout.points[0].cy), (40.0, 570.0));
    assert_eq!((layout.points[1].cx, layout.points[1].cy), (780.0, 20.0));

    let clusters = assign_placeholder_clusters(batch.len(), config.cluster_count, fixed_random());
    assert_eq!(clusters.len(), 2);
    shell.set_clusters(clusters);
    assert!(shell.shows_search());

    // Search carries the query and the serialized labels
    let mut search = SearchState::default();
    search.set_query("foo".to_string());
    let request = search.begin(shell.clusters()).unwrap();
    let url = request.url(&config.search_url());

    let (path, query) = url.split_once('?').unwrap();
    assert_eq!(path, "/api/search");
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    assert_eq!(pairs[0], ("query".to_string(), "foo".to_string()));
    assert_eq!(pairs[1].0, "cluster");
    assert_eq!(pairs[1].1, r#"[{"id":0,"cluster":0},{"id":1,"cluster":3}]"#);

    search.finish(SearchResponse::from_json(
        r#"{"results": [{"title": "a.txt", "excerpt": "alpha", "tags": ["x"]}, {"title": "b.pdf", "excerpt": "beta"}]}"#,
    ));
    assert_eq!(search.results().len(), 2);
    assert!(search.results()[1].tags.is_empty());
}

#[test]
fn test_failed_upload_keeps_projection_hidden() {
    let mut shell = ShellState::default();
    let mut upload = UploadState::default();

    upload.begin();
    if let Some(batch) = upload.finish(Err(ClientError::upload("HTTP 413 Payload Too Large"))) {
        shell.set_batch(batch);
    }

    assert!(!upload.is_busy());
    assert_eq!(upload.error(), Some(UPLOAD_FAILURE_MESSAGE));
    assert!(!shell.shows_projection());
}

#[test]
fn test_undecodable_upload_response_is_an_upload_failure() {
    let mut upload = UploadState::default();
    upload.begin();

    let forwarded = upload.finish(DocumentBatch::from_json("<html>oops</html>"));

    assert!(forwarded.is_none());
    assert_eq!(upload.error(), Some(UPLOAD_FAILURE_MESSAGE));
}

#[test]
fn test_zero_point_batch_still_yields_empty_assignment() {
    let config = FrontendConfig::default();
    let batch = DocumentBatch::from_json(r#"{"embedding": []}"#).unwrap();

    assert!(ScatterLayout::compute(&batch.embedding, &config.plot).is_none());
    let clusters = assign_placeholder_clusters(batch.len(), config.cluster_count, || 0.5);
    assert!(clusters.is_empty());
}
