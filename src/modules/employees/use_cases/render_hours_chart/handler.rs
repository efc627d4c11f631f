use std::sync::Arc;

use crate::modules::employees::core::aggregate::{aggregate_hours, validate_intervals};
use crate::modules::employees::core::chart::{encode_png, render_hours_pie};
use crate::modules::employees::core::ports::TimeEntrySource;
use crate::modules::employees::use_cases::errors::ApplicationError;

pub struct RenderHoursChartHandler {
    source: Arc<dyn TimeEntrySource + Send + Sync>,
    reject_negative_durations: bool,
}

impl RenderHoursChartHandler {
    pub fn new(
        source: Arc<dyn TimeEntrySource + Send + Sync>,
        reject_negative_durations: bool,
    ) -> Self {
        Self {
            source,
            reject_negative_durations,
        }
    }

    /// Fetch, aggregate, and rasterize; returns encoded PNG bytes.
    pub async fn handle(&self) -> Result<Vec<u8>, ApplicationError> {
        let records = self.source.fetch_time_entries().await?;
        if self.reject_negative_durations {
            validate_intervals(&records)
                .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        }
        let employees = aggregate_hours(&records);
        let canvas = render_hours_pie(&employees);
        encode_png(&canvas).map_err(|cause| ApplicationError::Unexpected(cause.to_string()))
    }
}
