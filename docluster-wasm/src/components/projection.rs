//! SVG scatter plot of the uploaded documents' 2-D embedding

use docluster_core::{
    assign_placeholder_clusters, Axis, ClusterAssignment, DocumentBatch, FrontendConfig,
    MarkerStyle, PlotConfig, ScatterLayout,
};
use leptos::prelude::*;

/// Projection renderer component
///
/// Redraws from scratch whenever `batch` changes, then reports a placeholder
/// cluster label for every point through `on_clustered`. Hovering a marker
/// enlarges it; nothing else reacts to the pointer.
///
/// # Props
/// - `batch` - Latest processed batch from the shell
/// - `on_clustered` - Receives one label per embedding point
#[component]
pub fn ProjectionRenderer(
    /// Latest processed batch
    #[prop(into)]
    batch: Signal<Option<DocumentBatch>>,
    /// Callback with the synthesized cluster assignment
    on_clustered: Callback<ClusterAssignment>,
) -> impl IntoView {
    let config = expect_context::<FrontendConfig>();
    let plot = StoredValue::new(config.plot.clone());
    let cluster_count = config.cluster_count;
    let hovered = RwSignal::new(None::<usize>);

    // Recomputed on every batch notification, identical or not
    let layout = move || {
        batch.with(|b| {
            b.as_ref()
                .and_then(|b| plot.with_value(|p| ScatterLayout::compute(&b.embedding, p)))
        })
    };

    // Labels are drawn after every redraw, one per point
    Effect::new(move |_| {
        let Some(len) = batch.with(|b| b.as_ref().map(DocumentBatch::len)) else {
            return;
        };
        hovered.set(None);
        let assignment = assign_placeholder_clusters(len, cluster_count, js_sys::Math::random);
        log::info!(
            "Assigned placeholder clusters to {} points",
            assignment.len()
        );
        on_clustered.run(assignment);
    });

    view! {
        <div class="projection-renderer bg-white shadow rounded-lg p-6">
            <h2 class="text-xl font-semibold mb-4">"Document Clusters"</h2>
            <div class="overflow-x-auto">
                {move || match layout() {
                    Some(layout) => view! { <ScatterPlot layout=layout hovered=hovered plot=plot/> }.into_any(),
                    None => view! {
                        <p class="text-center text-gray-500 py-8">"No documents to display."</p>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ScatterPlot(
    layout: ScatterLayout,
    hovered: RwSignal<Option<usize>>,
    plot: StoredValue<PlotConfig>,
) -> impl IntoView {
    let markers = layout
        .points
        .into_iter()
        .map(|point| {
            let index = point.index;
            let style = move || {
                let is_hovered = hovered.get() == Some(index);
                plot.with_value(|p| MarkerStyle::for_state(p, is_hovered))
            };

            view! {
                <circle
                    cx=point.cx.to_string()
                    cy=point.cy.to_string()
                    r=move || style().radius.to_string()
                    opacity=move || style().opacity.to_string()
                    fill=point.fill
                    on:mouseenter=move |_| hovered.set(Some(index))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    view! {
        <svg
            class="mx-auto"
            width=layout.width.to_string()
            height=layout.height.to_string()
        >
            <g class="points">{markers}</g>
            <AxisView axis=layout.x_axis/>
            <AxisView axis=layout.y_axis/>
        </svg>
    }
}

#[component]
fn AxisView(axis: Axis) -> impl IntoView {
    let (x2, y2) = axis.tick_line_end();
    let (label_x, label_y) = axis.label_position();
    let ticks = axis
        .ticks
        .iter()
        .map(|tick| {
            view! {
                <g class="tick" opacity="1" transform=axis.tick_transform(tick)>
                    <line stroke="currentColor" x2=x2.to_string() y2=y2.to_string()/>
                    <text
                        fill="currentColor"
                        x=label_x.to_string()
                        y=label_y.to_string()
                        dy=axis.label_dy()
                    >
                        {tick.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <g
            transform=axis.transform.clone()
            fill="none"
            font-size="10"
            font-family="sans-serif"
            text-anchor=axis.text_anchor()
        >
            <path class="domain" stroke="currentColor" d=axis.domain_path.clone()/>
            {ticks}
        </g>
    }
}
