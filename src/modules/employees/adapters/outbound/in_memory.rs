// In memory time entry source.
//
// Purpose
// - Exercise the use cases without a network.
//
// Responsibilities
// - Serve preloaded records, or fail the way the remote adapter fails:
//   offline transport errors and forced upstream status codes.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::employees::core::ports::{FetchError, TimeEntrySource};
use crate::modules::employees::core::record::TimeEntryRecord;

#[derive(Default)]
pub struct InMemoryTimeEntrySource {
    records: RwLock<Vec<TimeEntryRecord>>,
    fail_status: Option<u16>,
    is_offline: bool,
}

impl InMemoryTimeEntrySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn preload(&self, records: Vec<TimeEntryRecord>) {
        *self.records.write().await = records;
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn fail_with_status(&mut self, status: u16) {
        self.fail_status = Some(status);
    }
}

#[async_trait]
impl TimeEntrySource for InMemoryTimeEntrySource {
    async fn fetch_time_entries(&self) -> Result<Vec<TimeEntryRecord>, FetchError> {
        if self.is_offline {
            return Err(FetchError::Transport("time entry source offline".into()));
        }
        if let Some(status) = self.fail_status {
            return Err(FetchError::UpstreamStatus { status });
        }
        Ok(self.records.read().await.clone())
    }
}
