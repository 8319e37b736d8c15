//! REST helper for the vessel contents resource.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: the request resolves immediately to
//! [`FetchError::Unavailable`] so state logic stays testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies all come
//! back as `Err`; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FetchError;
use super::types::ContentItem;
use crate::consts::VESSEL_ENDPOINT_PREFIX;
use crate::state::viewer::VesselRef;

/// Path of the contents resource for `vessel`.
pub fn vessel_contents_endpoint(vessel: &VesselRef) -> String {
    format!("{VESSEL_ENDPOINT_PREFIX}{}", vessel.as_str())
}

/// Fetch the full content list of `vessel` with `GET /vessel/{id}`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a JSON array of content items.
pub async fn fetch_vessel_contents(vessel: &VesselRef) -> Result<Vec<ContentItem>, FetchError> {
    let url = vessel_contents_endpoint(vessel);
    #[cfg(feature = "csr")]
    {
        log::debug!("requesting vessel contents: {url}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<Vec<ContentItem>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(FetchError::Unavailable(url))
    }
}
