use async_trait::async_trait;
use thiserror::Error;

use crate::modules::employees::core::record::TimeEntryRecord;

/// Failure kinds of one upstream fetch. The caller collapses them into a
/// single client-facing response; the distinction stays available for logs
/// and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the time entry API: {0}")]
    Transport(String),

    // Display text matches the original user-facing message for this case.
    #[error("Failed to retrieve data. Status code: {status}")]
    UpstreamStatus { status: u16 },

    #[error("could not decode the time entry payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait TimeEntrySource {
    async fn fetch_time_entries(&self) -> Result<Vec<TimeEntryRecord>, FetchError>;
}
