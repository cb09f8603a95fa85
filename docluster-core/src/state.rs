//! View state for the three panels and the application shell
//!
//! Each panel keeps one of these behind a signal. The transitions live here
//! so they can be exercised without a browser.

use crate::error::Result;
use crate::model::{ClusterAssignment, DocumentBatch, SearchResponse, SearchResult};
use crate::search::SearchRequest;

pub const UPLOAD_PROMPT: &str = "Drag and drop documents here, or click to select files";
pub const UPLOAD_DRAG_PROMPT: &str = "Drop the documents here...";
pub const UPLOAD_BUSY_PROMPT: &str = "Processing documents...";

/// Upload panel state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    busy: bool,
    /// Nesting depth of `dragenter` events; children of the drop zone fire
    /// their own enter/leave pairs
    drag_depth: u32,
    error: Option<String>,
}

impl UploadState {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_depth > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pointer entered the drop zone or one of its children
    pub fn drag_enter(&mut self) {
        if !self.busy {
            self.drag_depth += 1;
        }
    }

    /// Pointer left the drop zone or one of its children
    pub fn drag_leave(&mut self) {
        self.drag_depth = self.drag_depth.saturating_sub(1);
    }

    /// Drop or cancelled drag; the highlight goes away regardless of depth
    pub fn drag_end(&mut self) {
        self.drag_depth = 0;
    }

    /// Text shown inside the drop zone
    pub fn prompt(&self) -> &'static str {
        if self.busy {
            UPLOAD_BUSY_PROMPT
        } else if self.is_drag_active() {
            UPLOAD_DRAG_PROMPT
        } else {
            UPLOAD_PROMPT
        }
    }

    /// Enter the busy state; `false` when an upload is already outstanding
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.drag_depth = 0;
        self.error = None;
        true
    }

    /// Leave the busy state, returning the batch to forward on success
    pub fn finish(&mut self, outcome: Result<DocumentBatch>) -> Option<DocumentBatch> {
        self.busy = false;
        match outcome {
            Ok(batch) => {
                log::info!("Processed documents: {} points", batch.len());
                Some(batch)
            },
            Err(err) => {
                log::error!("Upload error: {err}");
                self.error = Some(err.into_upload().user_message().to_string());
                None
            },
        }
    }
}

/// Search panel state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    query: String,
    busy: bool,
    error: Option<String>,
    results: Vec<SearchResult>,
    /// Bumped whenever a response replaces `results`
    results_revision: u64,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn results_revision(&self) -> u64 {
        self.results_revision
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Searching..."
        } else {
            "Search"
        }
    }

    /// Start a search for the current query
    ///
    /// Returns the request to send, or `None` when the query is blank or a
    /// search is already outstanding.
    pub fn begin(&mut self, clusters: Option<&ClusterAssignment>) -> Option<SearchRequest> {
        if self.busy {
            return None;
        }
        match SearchRequest::new(&self.query, clusters) {
            Ok(Some(request)) => {
                self.busy = true;
                self.error = None;
                Some(request)
            },
            Ok(None) => None,
            Err(err) => {
                log::error!("Search error: {err}");
                self.error = Some(err.user_message().to_string());
                None
            },
        }
    }

    /// Leave the busy state; failures keep the previous results on screen
    pub fn finish(&mut self, outcome: Result<SearchResponse>) {
        self.busy = false;
        match outcome {
            Ok(response) => {
                log::debug!("Search returned {} results", response.results.len());
                self.results = response.results;
                self.results_revision += 1;
            },
            Err(err) => {
                log::error!("Search error: {err}");
                self.error = Some(err.into_search().user_message().to_string());
            },
        }
    }
}

/// Cross-panel state owned by the application shell
///
/// Each slot has a single setter. `batch_revision` changes on every upload,
/// even when the new batch equals the old one, so the projection redraws
/// per upload rather than per distinct value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    batch: Option<DocumentBatch>,
    batch_revision: u64,
    clusters: Option<ClusterAssignment>,
}

impl ShellState {
    pub fn batch(&self) -> Option<&DocumentBatch> {
        self.batch.as_ref()
    }

    pub fn batch_revision(&self) -> u64 {
        self.batch_revision
    }

    pub fn clusters(&self) -> Option<&ClusterAssignment> {
        self.clusters.as_ref()
    }

    pub fn set_batch(&mut self, batch: DocumentBatch) {
        self.batch = Some(batch);
        self.batch_revision += 1;
    }

    pub fn set_clusters(&mut self, clusters: ClusterAssignment) {
        self.clusters = Some(clusters);
    }

    pub fn shows_projection(&self) -> bool {
        self.batch.is_some()
    }

    pub fn shows_search(&self) -> bool {
        self.clusters.is_some()
    }
}
