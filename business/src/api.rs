//! Small helpers shared by the REST commands.
//!
//! Commands use `ehttp` so the completion callback can carry a cloned
//! [`campusdesk_states::Updater`] across threads; these helpers keep the
//! per-command match arms short.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Decode a JSON response body.
pub(crate) fn parse_json<T: DeserializeOwned>(response: &ehttp::Response) -> Result<T> {
    serde_json::from_slice(&response.bytes)
        .with_context(|| format!("decoding response from {}", response.url))
}

/// Error message for a non-2xx response.
pub(crate) fn status_error(response: &ehttp::Response) -> String {
    format!("API returned status: {}", response.status)
}

/// A DELETE request (ehttp ships builders for GET/POST only).
pub(crate) fn delete_request(url: &str) -> ehttp::Request {
    ehttp::Request {
        method: "DELETE".to_owned(),
        ..ehttp::Request::get(url)
    }
}
