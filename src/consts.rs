//! Fixed viewer parameters and the DOM contract shared with the host page.

/// Number of content rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Path prefix of the vessel contents resource; the vessel id is appended.
pub const VESSEL_ENDPOINT_PREFIX: &str = "/vessel/";

/// Message shown in the blocking alert when a contents request fails.
pub const FETCH_FAILED_ALERT: &str = "Error fetching vessel details.";

/// Host elements that open a vessel's contents when clicked.
pub const VESSEL_LINK_SELECTOR: &str = ".vessel-name";

/// Attribute on a vessel link that carries the vessel id.
pub const VESSEL_ID_ATTRIBUTE: &str = "data-vessel-id";

/// Host-provided container the viewer mounts into; never rendered by the viewer.
pub const PANEL_ID: &str = "vessel-contents";
pub const CONTENTS_LIST_ID: &str = "contents-list";
pub const CURRENT_PAGE_ID: &str = "current-page";
pub const PREV_PAGE_ID: &str = "prev-page";
pub const NEXT_PAGE_ID: &str = "next-page";
