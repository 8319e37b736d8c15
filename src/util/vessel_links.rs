//! Click binding for the host page's vessel links.
//!
//! SYSTEM CONTEXT
//! ==============
//! The vessel list is rendered by the host page, not by this crate. Each
//! `.vessel-name` element carries its id in `data-vessel-id`; clicking one
//! opens that vessel in the viewer instead of following the link.

#[cfg(test)]
#[path = "vessel_links_test.rs"]
mod vessel_links_test;

use leptos::prelude::*;

use crate::state::viewer::{VesselRef, ViewerState};

/// Interpret a raw `data-vessel-id` value. Blank ids select nothing.
pub fn vessel_ref_from_attribute(raw: Option<String>) -> Option<VesselRef> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(VesselRef::new(trimmed))
}

/// Attach a click handler to every vessel link currently in the document.
///
/// Returns the number of links bound.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn bind_vessel_links(viewer: RwSignal<ViewerState>) -> u32 {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::consts::{VESSEL_ID_ATTRIBUTE, VESSEL_LINK_SELECTOR};
        use crate::util::viewer_actions::select_vessel;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("no document; vessel links not bound");
            return 0;
        };
        let links = match document.query_selector_all(VESSEL_LINK_SELECTOR) {
            Ok(links) => links,
            Err(err) => {
                log::warn!("vessel link query failed: {err:?}");
                return 0;
            }
        };

        let mut bound = 0;
        for index in 0..links.length() {
            let Some(node) = links.item(index) else {
                continue;
            };
            let Ok(link) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
                ev.prevent_default();
                let Some(Ok(target)) = ev.current_target().map(JsCast::dyn_into::<web_sys::Element>) else {
                    return;
                };
                match vessel_ref_from_attribute(target.get_attribute(VESSEL_ID_ATTRIBUTE)) {
                    Some(vessel) => select_vessel(viewer, vessel),
                    None => log::warn!("vessel link without {VESSEL_ID_ATTRIBUTE}"),
                }
            });
            match link.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
                Ok(()) => bound += 1,
                Err(err) => log::warn!("vessel link bind failed: {err:?}"),
            }
            // Listeners live as long as the page.
            handler.forget();
        }
        log::debug!("bound {bound} vessel links");
        bound
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
