//! Root component: owns the viewer state and wires the host page to it.

use leptos::prelude::*;

use crate::components::vessel_contents::VesselContents;
use crate::state::viewer::ViewerState;
use crate::util::panel::set_panel_visible;
use crate::util::vessel_links::bind_vessel_links;

/// Root application component.
///
/// Provides the single `ViewerState` signal, binds the host page's vessel
/// links once mounted, keeps the host panel's visibility in sync, and
/// renders the panel's contents.
#[component]
pub fn App() -> impl IntoView {
    let viewer = RwSignal::new(ViewerState::default());
    provide_context(viewer);

    // Runs once after mount; reads no signals.
    Effect::new(move || {
        bind_vessel_links(viewer);
    });

    Effect::new(move || set_panel_visible(viewer.with(|s| s.visible)));

    view! { <VesselContents/> }
}
