//! Leptos UI components for the document clustering front end
//!
//! Top to bottom: [`App`] owns the shared state and shows
//! [`UploadPanel`], then [`ProjectionRenderer`] once a batch exists, then
//! [`SearchPanel`] once cluster labels exist.

pub mod app;
pub mod projection;
pub mod search_panel;
pub mod upload_panel;

pub use app::App;
pub use projection::ProjectionRenderer;
pub use search_panel::{SearchPanel, SearchResultList};
pub use upload_panel::UploadPanel;
