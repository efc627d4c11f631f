// Outbound adapter for the remote time entry API.
//
// Purpose
// - Issue the single GET the app performs and decode the JSON record list.
//
// Responsibilities
// - Build the request URL as `{base}?code={key}`, the upstream contract.
// - Keep transport, upstream-status, and decode failures distinguishable.
// - One request per invocation; no retries, client-default timeout.

use async_trait::async_trait;
use reqwest::Client;

use crate::modules::employees::core::ports::{FetchError, TimeEntrySource};
use crate::modules::employees::core::record::TimeEntryRecord;

pub struct RemoteTimeEntryApi {
    base_url: String,
    api_key: String,
    client: Client,
}

impl RemoteTimeEntryApi {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("employee_time_tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        }
    }

    fn request_url(&self) -> String {
        format!("{}?code={}", self.base_url, self.api_key)
    }
}

#[async_trait]
impl TimeEntrySource for RemoteTimeEntryApi {
    async fn fetch_time_entries(&self) -> Result<Vec<TimeEntryRecord>, FetchError> {
        let response = self
            .client
            .get(self.request_url())
            .send()
            .await
            .map_err(|cause| FetchError::Transport(cause.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|cause| FetchError::Transport(cause.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}
