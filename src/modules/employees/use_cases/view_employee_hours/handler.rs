use std::sync::Arc;

use crate::modules::employees::core::aggregate::{
    AggregatedEmployee, aggregate_hours, validate_intervals,
};
use crate::modules::employees::core::ports::TimeEntrySource;
use crate::modules::employees::use_cases::errors::ApplicationError;

pub struct ViewEmployeeHoursHandler {
    source: Arc<dyn TimeEntrySource + Send + Sync>,
    reject_negative_durations: bool,
}

impl ViewEmployeeHoursHandler {
    pub fn new(
        source: Arc<dyn TimeEntrySource + Send + Sync>,
        reject_negative_durations: bool,
    ) -> Self {
        Self {
            source,
            reject_negative_durations,
        }
    }

    pub async fn handle(&self) -> Result<Vec<AggregatedEmployee>, ApplicationError> {
        let records = self.source.fetch_time_entries().await?;
        if self.reject_negative_durations {
            validate_intervals(&records)
                .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        }
        Ok(aggregate_hours(&records))
    }
}
