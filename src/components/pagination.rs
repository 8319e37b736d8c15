//! Previous/next controls and the current page label.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::consts::{CURRENT_PAGE_ID, NEXT_PAGE_ID, PREV_PAGE_ID};
use crate::state::viewer::{ContentsPage, ViewerState};
use crate::util::viewer_actions::{next_page, prev_page};

/// Page navigation for the contents panel.
///
/// Button states and the label reflect the last rendered page, not the
/// page a pending request is heading to.
#[component]
pub fn Pagination() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();

    let label = move || viewer.with(|s| page_label(s.rendered.as_ref()));
    let prev_disabled = move || viewer.with(|s| prev_button_disabled(s.rendered.as_ref()));
    let next_disabled = move || viewer.with(|s| next_button_disabled(s.rendered.as_ref()));

    view! {
        <nav class="pagination">
            <button
                id=PREV_PAGE_ID
                class="btn pagination__prev"
                disabled=prev_disabled
                on:click=move |_| prev_page(viewer)
            >
                "Previous"
            </button>
            <span class="pagination__label">
                "Page " <span id=CURRENT_PAGE_ID>{label}</span>
            </span>
            <button
                id=NEXT_PAGE_ID
                class="btn pagination__next"
                disabled=next_disabled
                on:click=move |_| next_page(viewer)
            >
                "Next"
            </button>
        </nav>
    }
}

fn page_label(page: Option<&ContentsPage>) -> String {
    page.map(|p| p.page.to_string()).unwrap_or_default()
}

fn prev_button_disabled(page: Option<&ContentsPage>) -> bool {
    page.is_none_or(|p| p.prev_disabled)
}

fn next_button_disabled(page: Option<&ContentsPage>) -> bool {
    page.is_none_or(|p| p.next_disabled)
}
