//! Validate inbound complaint lines into immutable snapshots.

use crate::error::StatsError;
use crate::types::{ComplaintSnapshot, ComplaintStatus, InboundComplaint};

/// Validate an InboundComplaint and build the snapshot the engine consumes.
pub fn intake(raw: &InboundComplaint) -> Result<ComplaintSnapshot, StatsError> {
  if raw.status.trim().is_empty() {
    return Err(StatsError::validation("status", "must not be empty"));
  }

  // Zero is a legitimate assignment; only negatives and overflow are rejected.
  let resolution_days_assigned = match raw.resolution_days_assigned {
    Some(days) if days < 0 => {
      return Err(StatsError::validation(
        "resolution_days_assigned",
        "must not be negative",
      ))
    }
    Some(days) => Some(u32::try_from(days).map_err(|_| {
      StatsError::validation("resolution_days_assigned", "out of range")
    })?),
    None => None,
  };

  let department = raw
    .department
    .as_deref()
    .map(str::trim)
    .filter(|d| !d.is_empty())
    .map(str::to_string);

  Ok(ComplaintSnapshot {
    status: ComplaintStatus::from_str_loose(&raw.status),
    content: raw.content.clone(),
    resolution_days_assigned,
    department,
  })
}

/// Parse one JSON line and validate it.
pub fn intake_line(line: &str) -> Result<ComplaintSnapshot, StatsError> {
  let raw: InboundComplaint = serde_json::from_str(line)?;
  intake(&raw)
}
