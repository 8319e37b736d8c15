//! Vessel contents view state and pagination.
//!
//! DESIGN
//! ======
//! One `ViewerState` per mounted viewer. Navigation methods only move the
//! page number and report which vessel to re-request; the list itself is
//! never cached, so every page turn renders from a fresh response through
//! [`ViewerState::apply_load`].
//!
//! The page number is deliberately unguarded below 1: stepping back from
//! page 1 yields page 0 and an empty table. Whether this should clamp is
//! still an open product decision.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use std::fmt;

use crate::consts::{FETCH_FAILED_ALERT, PAGE_SIZE};
use crate::net::error::FetchError;
use crate::net::types::ContentItem;

/// Opaque vessel identifier taken from a host link's `data-vessel-id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VesselRef(String);

impl VesselRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VesselRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VesselRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VesselRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One table row, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRow {
    pub item_name: String,
    pub quantity: String,
}

impl From<&ContentItem> for ContentRow {
    fn from(item: &ContentItem) -> Self {
        Self {
            item_name: item.item_name_text(),
            quantity: item.quantity_text(),
        }
    }
}

/// A rendered page of contents plus the navigation control states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentsPage {
    pub rows: Vec<ContentRow>,
    /// Page number as displayed; may be out of range after unguarded navigation.
    pub page: i64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// What the caller must do after a request resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadEffect {
    /// A new page was rendered and the panel shown.
    Rendered,
    /// Nothing changed; show this message in a blocking alert.
    Alert(&'static str),
}

/// View state of the contents panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerState {
    /// 1-based page number; never clamped.
    pub current_page: i64,
    /// Vessel whose contents are shown; `None` until the first click.
    pub selected_vessel: Option<VesselRef>,
    /// Last successfully rendered page.
    pub rendered: Option<ContentsPage>,
    /// Whether the contents panel is shown.
    pub visible: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            current_page: 1,
            selected_vessel: None,
            rendered: None,
            visible: false,
        }
    }
}

impl ViewerState {
    /// Select `vessel`, reset to page 1, and return the vessel to load.
    pub fn select_vessel(&mut self, vessel: VesselRef) -> VesselRef {
        self.current_page = 1;
        self.selected_vessel = Some(vessel.clone());
        vessel
    }

    /// Advance one page. Returns the vessel to re-request, if one is selected.
    pub fn next_page(&mut self) -> Option<VesselRef> {
        self.current_page += 1;
        self.selected_vessel.clone()
    }

    /// Go back one page with no floor. Returns the vessel to re-request, if one is selected.
    pub fn prev_page(&mut self) -> Option<VesselRef> {
        self.current_page -= 1;
        self.selected_vessel.clone()
    }

    /// Hide the panel without touching page, vessel, or the rendered rows.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Apply a resolved contents request.
    ///
    /// Success renders at the page current *now*, which may differ from the
    /// page at dispatch if the user navigated while the request was in flight.
    /// Failure leaves every field untouched.
    pub fn apply_load(&mut self, outcome: &Result<Vec<ContentItem>, FetchError>) -> LoadEffect {
        match outcome {
            Ok(contents) => {
                self.rendered = Some(render_page(contents, self.current_page));
                self.visible = true;
                LoadEffect::Rendered
            }
            Err(_) => LoadEffect::Alert(FETCH_FAILED_ALERT),
        }
    }
}

/// Bounds of the half-open window `[start, end)` for `page` over `len` items.
///
/// `start` is negative for pages below 1 and may exceed `end` past the last page.
pub fn page_bounds(len: usize, page: i64) -> (i64, i64) {
    let size = i64::try_from(PAGE_SIZE).unwrap_or(i64::MAX);
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let start = page.saturating_sub(1).saturating_mul(size);
    let end = start.saturating_add(size).min(len);
    (start, end)
}

/// Render the slice of `contents` for `page`.
///
/// Only indices inside both `[start, end)` and the list are rendered, so an
/// out-of-range page produces an empty table rather than a failure.
pub fn render_page(contents: &[ContentItem], page: i64) -> ContentsPage {
    let (start, end) = page_bounds(contents.len(), page);
    let from = usize::try_from(start.max(0)).unwrap_or(usize::MAX);
    let to = usize::try_from(end.max(0)).unwrap_or(0);
    let rows = contents
        .get(from..to.max(from))
        .unwrap_or_default()
        .iter()
        .map(ContentRow::from)
        .collect();
    let len = i64::try_from(contents.len()).unwrap_or(i64::MAX);
    ContentsPage {
        rows,
        page,
        prev_disabled: page == 1,
        next_disabled: end >= len,
    }
}
