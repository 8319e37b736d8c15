//! Host-owned contents panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page provides an empty `#vessel-contents` container. The viewer
//! mounts its table and controls inside it and only toggles the
//! container's `display`.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// CSS `display` value for the panel.
pub fn panel_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// The host's `#vessel-contents` element, if the page has one.
#[cfg(feature = "csr")]
pub fn host_panel() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()?
        .document()?
        .get_element_by_id(crate::consts::PANEL_ID)?;
    match element.dyn_into::<web_sys::HtmlElement>() {
        Ok(panel) => Some(panel),
        Err(_) => None,
    }
}

/// Show or hide the host panel.
pub fn set_panel_visible(visible: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(panel) = host_panel() else {
            log::warn!("#{} missing; panel visibility not applied", crate::consts::PANEL_ID);
            return;
        };
        if let Err(err) = panel.style().set_property("display", panel_display(visible)) {
            log::warn!("panel display update failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("panel display: {}", panel_display(visible));
    }
}
