//! # docluster-core
//!
//! Platform-independent logic for the document clustering front end.
//!
//! The browser crate (`docluster-wasm`) owns rendering and HTTP; everything
//! that can be decided without a browser lives here:
//!
//! - **Model**: the upload response, placeholder cluster labels and search
//!   results as they travel over the wire
//! - **Projection**: linear scales, nice ticks and the scatter plot layout
//! - **Requests**: upload selection rules and search URL construction
//! - **State**: busy/error transitions for each panel and the shell's two
//!   shared slots

pub mod clustering;
pub mod config;
pub mod error;
pub mod model;
pub mod projection;
pub mod scale;
pub mod search;
pub mod state;
pub mod upload;

pub use clustering::assign_placeholder_clusters;
pub use config::{FrontendConfig, Margin, PlotConfig};
pub use error::{ClientError, Result, SEARCH_FAILURE_MESSAGE, UPLOAD_FAILURE_MESSAGE};
pub use model::{ClusterAssignment, ClusterLabel, DocumentBatch, SearchResponse, SearchResult};
pub use projection::{Axis, AxisOrient, AxisTick, MarkerStyle, PlotPoint, ScatterLayout};
pub use scale::LinearScale;
pub use search::SearchRequest;
pub use state::{SearchState, ShellState, UploadState};
pub use upload::{partition_selection, Selection, UPLOAD_FIELD};
