// Pure aggregation over fetched time entry records.
//
// Purpose
// - Group records by employee id, sum worked hours per group, keep one
//   display name, and order the result by total hours.
//
// Responsibilities
// - First-seen input order decides both the display name of a group and the
//   tie-break between equal totals.
// - Never perform input or output.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::modules::employees::core::record::TimeEntryRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("end time must be after start time")]
    InvalidInterval,
}

/// Derived summary of one employee's total worked hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedEmployee {
    pub id: Uuid,
    pub employee_name: String,
    pub total_worked_hours: f64,
}

/// Reject any record whose end timestamp precedes its start timestamp.
///
/// The upstream feed contains such records and the aggregation itself accepts
/// them; this check only runs when the deployment opts into rejecting them.
pub fn validate_intervals(records: &[TimeEntryRecord]) -> Result<(), ValidateError> {
    if records
        .iter()
        .any(|record| record.end_time_utc < record.start_time_utc)
    {
        return Err(ValidateError::InvalidInterval);
    }
    Ok(())
}

/// Group records by employee id, sum each group's hours, and sort the groups
/// by total hours descending. Ties keep group-discovery order (stable sort).
pub fn aggregate_hours(records: &[TimeEntryRecord]) -> Vec<AggregatedEmployee> {
    let mut groups: Vec<AggregatedEmployee> = Vec::new();
    let mut index_by_id: HashMap<Uuid, usize> = HashMap::new();

    for record in records {
        match index_by_id.get(&record.id) {
            Some(&at) => groups[at].total_worked_hours += record.worked_hours(),
            None => {
                index_by_id.insert(record.id, groups.len());
                groups.push(AggregatedEmployee {
                    id: record.id,
                    employee_name: record.employee_name.clone().unwrap_or_default(),
                    total_worked_hours: record.worked_hours(),
                });
            }
        }
    }

    groups.sort_by(|a, b| {
        b.total_worked_hours
            .partial_cmp(&a.total_worked_hours)
            .unwrap_or(Ordering::Equal)
    });
    groups
}
