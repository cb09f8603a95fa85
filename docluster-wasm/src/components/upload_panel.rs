//! Drag-and-drop / file picker upload panel

use docluster_core::{partition_selection, upload::accept_attribute, DocumentBatch, UploadState};
use leptos::{ev::DragEvent, prelude::*, task::spawn_local};
use web_sys::{File, FileList, HtmlInputElement};

use crate::api::ApiClient;

fn files_of(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Upload panel component
///
/// Provides:
/// - Drop zone with drag-over highlight
/// - Click-to-browse through a hidden multi-file input
/// - Busy prompt while the upload is outstanding
/// - Static error message on failure, cleared by the next attempt
///
/// # Props
/// - `on_processed` - Receives the decoded batch after a successful upload
#[component]
pub fn UploadPanel(
    /// Callback with the processed document batch
    on_processed: Callback<DocumentBatch>,
) -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let state = RwSignal::new(UploadState::default());
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // One request per drop/select event
    let submit = move |files: Vec<File>| {
        if state.with_untracked(UploadState::is_busy) {
            log::debug!("Upload already in progress; ignoring selection");
            return;
        }

        let selection = partition_selection(files, |f| (f.name(), f.type_()));
        for name in &selection.rejected {
            log::warn!("Skipping unsupported file: {name}");
        }
        if selection.accepted.is_empty() {
            log::warn!("No supported documents in selection; nothing uploaded");
            return;
        }
        if !state.try_update(UploadState::begin).unwrap_or(false) {
            return;
        }

        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.process_documents(&selection.accepted).await;
            if let Some(batch) = state.try_update(|s| s.finish(outcome)).flatten() {
                on_processed.run(batch);
            }
        });
    };

    let handle_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(UploadState::drag_enter);
    };

    // Required for the zone to be a drop target
    let handle_drag_over = move |ev: DragEvent| ev.prevent_default();

    let handle_drag_leave = move |_ev: DragEvent| {
        state.update(UploadState::drag_leave);
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(UploadState::drag_end);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            submit(files_of(list));
        }
    };

    let handle_zone_click = move |_| {
        if state.with_untracked(UploadState::is_busy) {
            return;
        }
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let handle_file_select = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            submit(files_of(list));
        }
        // Allow picking the same files again
        input.set_value("");
    };

    let zone_class = move || {
        let base = "border-2 border-dashed rounded-lg p-8 text-center cursor-pointer";
        if state.with(UploadState::is_drag_active) {
            format!("{base} border-blue-500 bg-blue-50")
        } else {
            format!("{base} border-gray-300")
        }
    };

    let prompt_class = move || {
        if state.with(UploadState::is_drag_active) {
            "text-blue-500"
        } else {
            "text-gray-600"
        }
    };

    view! {
        <div class="upload-panel bg-white shadow rounded-lg p-6">
            <h2 class="text-xl font-semibold mb-4">"Upload Documents"</h2>

            <div
                class=zone_class
                role="button"
                aria-busy=move || state.with(UploadState::is_busy).to_string()
                on:dragenter=handle_drag_enter
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
                on:click=handle_zone_click
            >
                <input
                    type="file"
                    class="hidden"
                    multiple
                    accept=accept_attribute()
                    disabled=move || state.with(UploadState::is_busy)
                    on:click=|ev| ev.stop_propagation()
                    on:change=handle_file_select
                    node_ref=file_input_ref
                />
                <p class=prompt_class>{move || state.with(UploadState::prompt)}</p>
            </div>

            {move || state.with(|s| s.error().map(str::to_string)).map(|error| view! {
                <div class="mt-4 p-4 bg-red-50 text-red-700 rounded-md" role="alert">
                    {error}
                </div>
            })}
        </div>
    }
}
