//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the contents panel from the shared `ViewerState`
//! signal provided by `App` and route clicks to `util::viewer_actions`.

pub mod pagination;
pub mod vessel_contents;
