//! Errors raised at the edges: complaint intake, runtime settings, stream I/O.
//! The statistics themselves never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("setting {name}={value:?}: {reason}")]
  InvalidSetting {
    name: String,
    value: String,
    reason: String,
  },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl StatsError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn invalid_setting(name: &str, value: &str, reason: impl Into<String>) -> Self {
    Self::InvalidSetting {
      name: name.to_string(),
      value: value.to_string(),
      reason: reason.into(),
    }
  }
}

pub type StatsResult<T> = Result<T, StatsError>;
