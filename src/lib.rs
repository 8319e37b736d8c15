//! # vessel-viewer
//!
//! Leptos + WASM viewer for a vessel's cargo contents.
//!
//! The host page renders the vessel list and an empty `#vessel-contents`
//! container; every `.vessel-name` element carries a `data-vessel-id`.
//! Clicking one fetches `/vessel/{id}` and shows the items ten at a time
//! inside that container, with previous and next controls that re-request
//! the list for each page turn.
//!
//! Pure state and pagination live in `state`, the HTTP boundary in `net`,
//! browser side effects in `util`, and the rendered panel in `components`.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: installs the console logger and panic hook, then
/// mounts the viewer inside the host's `#vessel-contents` container.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    let Some(panel) = util::panel::host_panel() else {
        log::warn!("host page has no #{}; viewer not mounted", consts::PANEL_ID);
        return;
    };
    leptos::mount::mount_to(panel, app::App).forget();
}
