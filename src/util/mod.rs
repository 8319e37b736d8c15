//! Browser-side helpers for the viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate DOM and network side effects from the pure view
//! state so the state stays testable off-browser.

pub mod alert;
pub mod panel;
pub mod vessel_links;
pub mod viewer_actions;
