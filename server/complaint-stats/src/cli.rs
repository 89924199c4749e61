//! Report runner behind the binary: complaint JSON lines in, JSON lines out.
//!
//! Invalid lines produce an ErrorOutput line and are left out of the report.
//! One report line is written once the input is exhausted.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{StatsError, StatsResult};
use crate::intake;
use crate::stats::ComplaintStatisticsGenerator;
use crate::types::{ComplaintReport, ErrorOutput, ReportScope};

/// Restrict the report to one department.
pub const DEPARTMENT_VAR: &str = "REPORT_DEPARTMENT";
/// Size of the word ranking (default 15).
pub const TOP_N_VAR: &str = "REPORT_TOP_N";
/// Shortest word counted (default 3).
pub const MIN_TOKEN_LEN_VAR: &str = "REPORT_MIN_TOKEN_LEN";

/// Runtime settings for one report.
#[derive(Debug, Clone)]
pub struct Settings {
  pub config: Config,
  pub scope: ReportScope,
}

impl Settings {
  pub fn from_env() -> StatsResult<Self> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Build settings from any name -> value source. Blank department means all.
  pub fn from_lookup<F>(lookup: F) -> StatsResult<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Config::default();
    if let Some(n) = usize_setting(&lookup, TOP_N_VAR)? {
      config = config.with_default_top_n(n);
    }
    if let Some(n) = usize_setting(&lookup, MIN_TOKEN_LEN_VAR)? {
      config = config.with_min_token_len(n);
    }

    let scope = match lookup(DEPARTMENT_VAR) {
      Some(d) if !d.trim().is_empty() => ReportScope::Department(d.trim().to_string()),
      _ => ReportScope::All,
    };

    Ok(Self { config, scope })
  }
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      config: Config::default(),
      scope: ReportScope::All,
    }
  }
}

fn usize_setting<F>(lookup: &F, name: &str) -> StatsResult<Option<usize>>
where
  F: Fn(&str) -> Option<String>,
{
  match lookup(name) {
    Some(raw) => raw
      .trim()
      .parse()
      .map(Some)
      .map_err(|e| StatsError::invalid_setting(name, &raw, format!("{}", e))),
    None => Ok(None),
  }
}

/// Consume `input`, write error lines and the final report to `out`, and
/// return the report.
pub fn run<R: BufRead, W: Write>(
  input: R,
  mut out: W,
  settings: &Settings,
) -> StatsResult<ComplaintReport> {
  let mut complaints = Vec::new();

  for (idx, line) in input.lines().enumerate() {
    let line = line?;
    let line_no = idx + 1;

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    match intake::intake_line(trimmed) {
      Ok(snapshot) => complaints.push(snapshot),
      Err(e) => {
        log::warn!("line {}: skipped: {}", line_no, e);
        let err = match &e {
          StatsError::Validation { field, reason } => {
            ErrorOutput::new(line_no, reason.clone()).with_field(field.clone())
          }
          _ => ErrorOutput::new(line_no, e.to_string()),
        };
        serde_json::to_writer(&mut out, &err)?;
        writeln!(out)?;
      }
    }
  }

  log::info!(
    "{} complaints accepted for {}",
    complaints.len(),
    settings.scope.label()
  );
  let report =
    ComplaintStatisticsGenerator::new(&complaints, settings.config.clone()).report(&settings.scope);
  serde_json::to_writer(&mut out, &report)?;
  writeln!(out)?;
  out.flush()?;
  Ok(report)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::Value;
  use std::collections::HashMap;

  fn run_lines(input: &str, settings: &Settings) -> Vec<Value> {
    let mut out = Vec::new();
    run(input.as_bytes(), &mut out, settings).unwrap();
    String::from_utf8(out)
      .unwrap()
      .lines()
      .map(|l| serde_json::from_str(l).unwrap())
      .collect()
  }

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |name: &str| map.get(name).cloned()
  }

  #[test]
  fn writes_one_report_line_at_eof() {
    let input = concat!(
      r#"{"status":"resuelto","content":"foco quemado","resolution_days_assigned":4}"#,
      "\n",
      r#"{"status":"en proceso","content":"foco roto","resolution_days_assigned":8}"#,
      "\n",
    );
    let lines = run_lines(input, &Settings::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["status"]["total"], 2);
    assert_eq!(lines[0]["resolution_median_days"], 6.0);
    assert_eq!(lines[0]["top_words"][0][0], "foco");
  }

  #[test]
  fn blank_lines_are_skipped() {
    let input = "\n   \n{\"status\":\"pendiente\",\"content\":\"aula\"}\n\n";
    let lines = run_lines(input, &Settings::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["status"]["total"], 1);
  }

  #[test]
  fn invalid_lines_emit_error_output() {
    let input = concat!(
      "{not json\n",
      r#"{"status":"  ","content":"x"}"#,
      "\n",
      r#"{"status":"resuelto","content":"ventana","resolution_days_assigned":-1}"#,
      "\n",
      r#"{"status":"pendiente","content":"ventana rota"}"#,
      "\n",
    );
    let lines = run_lines(input, &Settings::default());
    assert_eq!(lines.len(), 4);

    assert_eq!(lines[0]["error"], true);
    assert_eq!(lines[0]["line"], 1);
    assert!(lines[0].get("field").is_none());

    assert_eq!(lines[1]["line"], 2);
    assert_eq!(lines[1]["field"], "status");

    assert_eq!(lines[2]["line"], 3);
    assert_eq!(lines[2]["field"], "resolution_days_assigned");

    // Only the valid line reaches the report.
    assert_eq!(lines[3]["status"]["total"], 1);
  }

  #[test]
  fn settings_are_applied() {
    let settings = Settings::from_lookup(lookup(&[
      (DEPARTMENT_VAR, " Maestranza "),
      (TOP_N_VAR, "1"),
      (MIN_TOKEN_LEN_VAR, "5"),
    ]))
    .unwrap();
    assert_eq!(settings.scope, ReportScope::Department("Maestranza".into()));

    let input = concat!(
      r#"{"status":"resuelto","content":"puerta rota puerta","department":"maestranza"}"#,
      "\n",
      r#"{"status":"pendiente","content":"proyector","department":"Soporte"}"#,
      "\n",
    );
    let lines = run_lines(input, &settings);
    let report = &lines[0];
    assert_eq!(report["scope"], "Maestranza");
    assert_eq!(report["status"]["total"], 1);
    // "rota" is under five chars; top one keeps only "puerta".
    assert_eq!(report["top_words"], serde_json::json!([["puerta", 2]]));
  }

  #[test]
  fn missing_settings_use_defaults() {
    let settings = Settings::from_lookup(lookup(&[(DEPARTMENT_VAR, "   ")])).unwrap();
    assert_eq!(settings.scope, ReportScope::All);
    assert_eq!(settings.config.default_top_n, 15);
    assert_eq!(settings.config.min_token_len, 3);
  }

  #[test]
  fn non_numeric_setting_is_rejected() {
    let err = Settings::from_lookup(lookup(&[(TOP_N_VAR, "muchos")])).unwrap_err();
    assert!(matches!(err, StatsError::InvalidSetting { .. }));
    assert!(err.to_string().contains(TOP_N_VAR));
  }
}
