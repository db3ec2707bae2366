//! Backend reachability, surfaced as a status dot in the top bar.

use campusdesk_states::{Command, Compute, StateCtx, Updater};
use log::debug;
use serde::Deserialize;

use crate::{BusinessConfig, api};

/// Result of the last health probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendAvailability {
    #[default]
    Checking,
    Available {
        commit: Option<String>,
    },
    Unavailable {
        error: String,
    },
}

/// Cache of the `GET {api}/systemInfo` probe.
#[derive(Debug, Default)]
pub struct BackendStatus {
    pub availability: BackendAvailability,
}

impl Compute for BackendStatus {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SystemInfoResponse {
    #[serde(default)]
    commit_id: Option<String>,
}

/// Probe the backend's `systemInfo` endpoint.
#[derive(Debug, Default)]
pub struct PingBackend;

impl Command for PingBackend {
    fn run(self: Box<Self>, ctx: &StateCtx, updater: Updater) {
        let config = ctx.state::<BusinessConfig>();
        let url = format!("{}/systemInfo", config.api_url());

        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let availability = match result {
                Ok(response) if response.status == 200 => {
                    let commit = api::parse_json::<SystemInfoResponse>(&response)
                        .ok()
                        .and_then(|info| info.commit_id);
                    debug!("backend reachable (commit {commit:?})");
                    BackendAvailability::Available { commit }
                }
                Ok(response) => BackendAvailability::Unavailable {
                    error: api::status_error(&response),
                },
                Err(err) => BackendAvailability::Unavailable { error: err },
            };
            updater.set(BackendStatus { availability });
        });
    }
}
