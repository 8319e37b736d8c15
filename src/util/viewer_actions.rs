//! Controller operations over the shared viewer signal.
//!
//! Each operation is a two-step lifecycle:
//!
//! 1. **Transition** — mutate `ViewerState` synchronously (reset, step the
//!    page, hide) and learn which vessel, if any, to request.
//! 2. **Resolve** — when the request settles, hand the outcome to
//!    [`ViewerState::apply_load`] and raise the alert it asks for.
//!
//! Requests are not sequenced or cancelled. If two overlap, whichever
//! resolves last decides what the table shows.

#[cfg(test)]
#[path = "viewer_actions_test.rs"]
mod viewer_actions_test;

use leptos::prelude::*;

use crate::net::error::FetchError;
use crate::net::types::ContentItem;
use crate::state::viewer::{LoadEffect, VesselRef, ViewerState};
use crate::util::alert;

/// Open `vessel`: back to page 1, then fetch its contents.
pub fn select_vessel(viewer: RwSignal<ViewerState>, vessel: VesselRef) {
    log::debug!("vessel selected: {vessel}");
    viewer.update(|s| {
        s.select_vessel(vessel);
    });
    load_contents(viewer);
}

/// Fetch the selected vessel's contents and render the current page.
pub fn load_contents(viewer: RwSignal<ViewerState>) {
    let Some(vessel) = viewer.with_untracked(|s| s.selected_vessel.clone()) else {
        log::warn!("contents requested before any vessel was selected");
        return;
    };
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_vessel_contents(&vessel).await;
            finish_load(viewer, &outcome);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        finish_load(viewer, &Err(FetchError::Unavailable(crate::net::api::vessel_contents_endpoint(&vessel))));
    }
}

/// Advance one page and re-fetch.
pub fn next_page(viewer: RwSignal<ViewerState>) {
    if viewer.try_update(ViewerState::next_page).flatten().is_some() {
        load_contents(viewer);
    }
}

/// Go back one page and re-fetch. No lower bound.
pub fn prev_page(viewer: RwSignal<ViewerState>) {
    if viewer.try_update(ViewerState::prev_page).flatten().is_some() {
        load_contents(viewer);
    }
}

/// Hide the contents panel.
pub fn hide_contents(viewer: RwSignal<ViewerState>) {
    viewer.update(ViewerState::hide);
}

fn finish_load(viewer: RwSignal<ViewerState>, outcome: &Result<Vec<ContentItem>, FetchError>) {
    match outcome {
        Ok(contents) => log::debug!("vessel contents loaded: {} items", contents.len()),
        Err(err) => log::warn!("vessel contents request failed: {err}"),
    }
    if let Some(LoadEffect::Alert(message)) = viewer.try_update(|s| s.apply_load(outcome)) {
        alert::show(message);
    }
}
