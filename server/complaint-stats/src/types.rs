//! Core types: complaint record contract, JSON intake/output shapes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — one complaint per stdin line)
// ---------------------------------------------------------------------------

/// One inbound complaint line. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundComplaint {
  pub status: String,
  #[serde(default)]
  pub content: String,
  #[serde(default)]
  pub resolution_days_assigned: Option<i64>,
  #[serde(default)]
  pub department: Option<String>,
}

// ---------------------------------------------------------------------------
// Complaint status (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
  Pending,
  InProgress,
  Resolved,
  /// Any label outside the tracked lifecycle, kept verbatim.
  Other(String),
}

impl ComplaintStatus {
  /// Accepts English labels and the Spanish ones used by the complaint desk.
  pub fn from_str_loose(s: &str) -> Self {
    let trimmed = s.trim();
    match trimmed.to_lowercase().as_str() {
      "pending" | "pendiente" => Self::Pending,
      "in_progress" | "in progress" | "in-progress" | "en proceso" | "en_proceso" => {
        Self::InProgress
      }
      "resolved" | "resuelto" => Self::Resolved,
      _ => Self::Other(trimmed.to_string()),
    }
  }

  /// In progress or resolved: a resolution time may have been assigned.
  pub fn has_progressed(&self) -> bool {
    matches!(self, Self::InProgress | Self::Resolved)
  }

  pub fn label(&self) -> &str {
    match self {
      Self::Pending => "pending",
      Self::InProgress => "in_progress",
      Self::Resolved => "resolved",
      Self::Other(label) => label,
    }
  }
}

// ---------------------------------------------------------------------------
// Record contract
// ---------------------------------------------------------------------------

/// Read-only view of a complaint, however the caller stores it.
pub trait ComplaintRecord {
  fn status(&self) -> ComplaintStatus;
  fn content(&self) -> &str;
  fn resolution_days_assigned(&self) -> Option<u32>;

  fn department(&self) -> Option<&str> {
    None
  }
}

/// Immutable complaint snapshot handed to the statistics engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintSnapshot {
  pub status: ComplaintStatus,
  pub content: String,
  pub resolution_days_assigned: Option<u32>,
  pub department: Option<String>,
}

impl ComplaintSnapshot {
  pub fn new(status: &str, content: impl Into<String>) -> Self {
    Self {
      status: ComplaintStatus::from_str_loose(status),
      content: content.into(),
      resolution_days_assigned: None,
      department: None,
    }
  }

  pub fn with_resolution_days(mut self, days: u32) -> Self {
    self.resolution_days_assigned = Some(days);
    self
  }

  pub fn with_department(mut self, department: impl Into<String>) -> Self {
    self.department = Some(department.into());
    self
  }
}

impl ComplaintRecord for ComplaintSnapshot {
  fn status(&self) -> ComplaintStatus {
    self.status.clone()
  }

  fn content(&self) -> &str {
    &self.content
  }

  fn resolution_days_assigned(&self) -> Option<u32> {
    self.resolution_days_assigned
  }

  fn department(&self) -> Option<&str> {
    self.department.as_deref()
  }
}

// ---------------------------------------------------------------------------
// Report scope
// ---------------------------------------------------------------------------

/// Which complaints a report covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportScope {
  #[default]
  All,
  Department(String),
}

impl ReportScope {
  pub fn label(&self) -> &str {
    match self {
      Self::All => "all departments",
      Self::Department(name) => name,
    }
  }

  /// Department match is case-insensitive; records without a department
  /// only belong to `All`.
  pub fn includes<R: ComplaintRecord>(&self, record: &R) -> bool {
    match self {
      Self::All => true,
      Self::Department(name) => record
        .department()
        .is_some_and(|d| d.trim().to_lowercase() == name.trim().to_lowercase()),
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Percentage of complaints per tracked status. With no complaints only
/// `total` is present; renderers default the missing percentages to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatusBreakdown {
  pub total: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pending_pct: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub in_progress_pct: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub resolved_pct: Option<f64>,
}

impl StatusBreakdown {
  pub fn pending_or_zero(&self) -> f64 {
    self.pending_pct.unwrap_or(0.0)
  }

  pub fn in_progress_or_zero(&self) -> f64 {
    self.in_progress_pct.unwrap_or(0.0)
  }

  pub fn resolved_or_zero(&self) -> f64 {
    self.resolved_pct.unwrap_or(0.0)
  }
}

/// Everything the analytics page and exported reports show for one scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintReport {
  pub scope: String,
  pub status: StatusBreakdown,
  /// 0.0 when no complaint has an assigned resolution time.
  pub resolution_median_days: f64,
  pub top_words: Vec<(String, usize)>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub line: usize,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(line: usize, message: impl Into<String>) -> Self {
    Self {
      error: true,
      line,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
