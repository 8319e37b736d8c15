//! Failure kinds for the vessel contents request.
//!
//! The viewer surfaces every variant the same way (one fixed alert); the
//! classification only feeds the console log.

/// Why a contents request produced no list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never completed (DNS, CORS, connection reset).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The body was not a JSON array of content items.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No browser to issue the request from.
    #[error("not available outside the browser: {0}")]
    Unavailable(String),
}
