//! Free-text search filtered by the current cluster assignment

use docluster_core::{ClusterAssignment, SearchResult, SearchState};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::api::ApiClient;

/// Search panel component
///
/// Searches only on explicit submit. Blank queries are ignored; the submit
/// button is disabled while a search is outstanding.
///
/// # Props
/// - `clusters` - Latest assignment, forwarded as the `cluster` parameter
#[component]
pub fn SearchPanel(
    /// Latest cluster assignment from the shell
    #[prop(into)]
    clusters: Signal<Option<ClusterAssignment>>,
) -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let state = RwSignal::new(SearchState::default());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = state
            .try_update(|s| clusters.with_untracked(|c| s.begin(c.as_ref())))
            .flatten();
        let Some(request) = request else {
            return;
        };

        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.search(&request).await;
            state.update(|s| s.finish(outcome));
        });
    };

    view! {
        <div class="search-panel bg-white shadow rounded-lg p-6">
            <h2 class="text-xl font-semibold mb-4">"Search Documents"</h2>

            <form class="mb-6" on:submit=handle_submit>
                <div class="flex gap-4">
                    <input
                        type="text"
                        class="flex-1 px-4 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="Enter your search query..."
                        prop:value=move || state.with(|s| s.query().to_string())
                        on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                    />
                    <button
                        type="submit"
                        class="px-6 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 disabled:opacity-50"
                        disabled=move || state.with(SearchState::is_busy)
                    >
                        {move || state.with(SearchState::submit_label)}
                    </button>
                </div>
            </form>

            {move || state.with(|s| s.error().map(str::to_string)).map(|error| view! {
                <div class="mb-6 p-4 bg-red-50 text-red-700 rounded-md" role="alert">
                    {error}
                </div>
            })}

            <SearchResultList state=state/>
        </div>
    }
}

/// Result list for the latest successful search
///
/// Rows are keyed by the response that produced them, so every response
/// rebuilds the list even when titles repeat.
#[component]
pub fn SearchResultList(
    /// Search panel state holding the results
    #[prop(into)]
    state: Signal<SearchState>,
) -> impl IntoView {
    let rows = move || {
        state.with(|s| {
            let revision = s.results_revision();
            s.results()
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, result)| (revision, index, result))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || state.with(|s| !s.results().is_empty())>
            <div class="space-y-4">
                <h3 class="text-lg font-medium">"Search Results"</h3>
                <div class="divide-y">
                    <For
                        each=rows
                        key=|(revision, index, _)| (*revision, *index)
                        children=|(_, _, result): (u64, usize, SearchResult)| {
                            view! { <ResultItem result=result/> }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ResultItem(result: SearchResult) -> impl IntoView {
    let tags = result
        .tags
        .into_iter()
        .map(|tag| {
            view! {
                <span class="tag px-2 py-1 bg-gray-100 text-gray-600 text-sm rounded">{tag}</span>
            }
        })
        .collect_view();

    view! {
        <div class="search-result py-4">
            <h4 class="font-medium">{result.title}</h4>
            <p class="text-gray-600 mt-1">{result.excerpt}</p>
            <div class="mt-2 flex gap-2">{tags}</div>
        </div>
    }
}
