//! Contents panel body: item table for the selected vessel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the host's `#vessel-contents` container, which stays
//! hidden until the first successful load. After that the table shows the
//! last rendered page until a newer response replaces it; failed requests
//! leave it as is.

#[cfg(test)]
#[path = "vessel_contents_test.rs"]
mod vessel_contents_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::consts::CONTENTS_LIST_ID;
use crate::state::viewer::{ContentRow, ViewerState};
use crate::util::viewer_actions::hide_contents;

/// Table and pagination controls for the `#vessel-contents` container.
#[component]
pub fn VesselContents() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();

    let title = move || viewer.with(panel_title);
    let rows = move || viewer.with(visible_rows);

    view! {
        <div class="vessel-contents__body">
            <header class="vessel-contents__header">
                <h2 class="vessel-contents__title">{title}</h2>
                <button
                    class="btn vessel-contents__close"
                    on:click=move |_| hide_contents(viewer)
                    title="Close"
                >
                    "Close"
                </button>
            </header>
            <table class="table vessel-contents__table">
                <thead>
                    <tr>
                        <th class="table__heading">"Item Name"</th>
                        <th class="table__heading">"Quantity"</th>
                    </tr>
                </thead>
                <tbody id=CONTENTS_LIST_ID>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td class="table__cell">{row.item_name}</td>
                                        <td class="table__cell">{row.quantity}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Pagination/>
        </div>
    }
}

fn panel_title(state: &ViewerState) -> String {
    state
        .selected_vessel
        .as_ref()
        .map_or_else(|| "Vessel contents".to_owned(), |vessel| format!("Contents of {vessel}"))
}

fn visible_rows(state: &ViewerState) -> Vec<ContentRow> {
    state.rendered.as_ref().map(|page| page.rows.clone()).unwrap_or_default()
}
