//! Application shell

use docluster_core::{ClusterAssignment, DocumentBatch, FrontendConfig, ShellState};
use leptos::prelude::*;

use super::{ProjectionRenderer, SearchPanel, UploadPanel};
use crate::api::ApiClient;

/// Main application component
///
/// Owns the only cross-panel state: the latest batch and the latest cluster
/// assignment. Panels receive read-only views and report back through
/// callbacks; nothing is ever cleared within a session.
#[component]
pub fn App(config: FrontendConfig) -> impl IntoView {
    provide_context(ApiClient::new(&config));
    provide_context(config);

    let shell = RwSignal::new(ShellState::default());

    // Tracks uploads, not cluster updates, so the projection only redraws
    // when a new batch arrives
    let batch_revision = Memo::new(move |_| shell.with(ShellState::batch_revision));
    let batch = Signal::derive(move || {
        batch_revision.track();
        shell.with_untracked(|s| s.batch().cloned())
    });
    let clusters = Signal::derive(move || shell.with(|s| s.clusters().cloned()));

    let on_processed = Callback::new(move |batch: DocumentBatch| {
        shell.update(|s| s.set_batch(batch));
    });
    let on_clustered = Callback::new(move |assignment: ClusterAssignment| {
        shell.update(|s| s.set_clusters(assignment));
    });

    view! {
        <div class="min-h-screen bg-gray-100">
            <nav class="bg-white shadow-lg">
                <div class="max-w-7xl mx-auto px-4 py-6">
                    <h1 class="text-3xl font-bold text-gray-900">"Document Clustering System"</h1>
                </div>
            </nav>

            <main class="max-w-7xl mx-auto px-4 py-6">
                <div class="grid grid-cols-1 gap-6">
                    <UploadPanel on_processed=on_processed/>

                    <Show when=move || shell.with(ShellState::shows_projection)>
                        <ProjectionRenderer batch=batch on_clustered=on_clustered/>
                    </Show>

                    <Show when=move || shell.with(ShellState::shows_search)>
                        <SearchPanel clusters=clusters/>
                    </Show>
                </div>
            </main>
        </div>
    }
}
