//! # docluster-wasm
//!
//! Browser front end for the document clustering demo, built with Leptos 0.8.
//!
//! Upload documents, view their 2-D embedding as a scatter plot and search
//! them with the current cluster labels as a filter. Processing, embedding,
//! clustering and ranking all happen behind two backend endpoints:
//!
//! - `POST /api/documents/process` (multipart, repeated `documents` field)
//! - `GET /api/search?query=…&cluster=…`
//!
//! ## Configuration
//!
//! ```html
//! <script>
//!   window.DOCLUSTER_CONFIG = { api_base: "http://localhost:8000", log_level: "debug" };
//! </script>
//! ```

pub mod api;
pub mod bootstrap;
pub mod components;

pub use api::ApiClient;
pub use bootstrap::{read_page_config, start};
pub use components::{App, ProjectionRenderer, SearchPanel, SearchResultList, UploadPanel};
