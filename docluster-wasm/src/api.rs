//! Browser HTTP client for the document processing and search endpoints
//!
//! Architecture:
//! Browser (WASM) → fetch (gloo-net) → API gateway → processor / search

use docluster_core::{
    ClientError, DocumentBatch, FrontendConfig, Result, SearchRequest, SearchResponse,
    UPLOAD_FIELD,
};
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// Client for the two backend endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    process_url: String,
    search_url: String,
}

impl ApiClient {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            process_url: config.process_url(),
            search_url: config.search_url(),
        }
    }

    pub fn process_url(&self) -> &str {
        &self.process_url
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// One multipart entry per file, in the given order
    pub fn upload_form(files: &[File]) -> std::result::Result<FormData, JsValue> {
        let form = FormData::new()?;
        for file in files {
            form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())?;
        }
        Ok(form)
    }

    /// Upload documents and decode the resulting batch
    pub async fn process_documents(&self, files: &[File]) -> Result<DocumentBatch> {
        let form = Self::upload_form(files)
            .map_err(|e| ClientError::upload(format!("failed to build form: {e:?}")))?;

        log::info!(
            "Uploading {} document(s) to {}",
            files.len(),
            self.process_url
        );

        let response = Request::post(&self.process_url)
            .body(form)
            .map_err(|e| ClientError::upload(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::upload(e.to_string()))?;

        let body = Self::success_body(response)
            .await
            .map_err(ClientError::upload)?;
        DocumentBatch::from_json(&body).map_err(ClientError::into_upload)
    }

    /// GET request for a search, not yet sent
    pub fn search_request(&self, request: &SearchRequest) -> Result<Request> {
        Request::get(&request.url(&self.search_url))
            .build()
            .map_err(|e| ClientError::search(e.to_string()))
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        log::debug!("Searching for {:?}", request.query());

        let response = self
            .search_request(request)?
            .send()
            .await
            .map_err(|e| ClientError::search(e.to_string()))?;

        let body = Self::success_body(response)
            .await
            .map_err(ClientError::search)?;
        SearchResponse::from_json(&body).map_err(ClientError::into_search)
    }

    /// Body text of a 2xx response; anything else is reported with its status
    async fn success_body(response: Response) -> std::result::Result<String, String> {
        if !response.ok() {
            return Err(format!(
                "HTTP error: {} {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .text()
            .await
            .map_err(|e| format!("failed to read response body: {e}"))
    }
}
