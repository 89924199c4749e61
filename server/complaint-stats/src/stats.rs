//! Complaint analytics: status breakdown, resolution-time median, word ranking.

use std::collections::HashMap;

use crate::config::Config;
use crate::median::RunningMedianCalculator;
use crate::text;
use crate::types::{ComplaintRecord, ComplaintReport, ComplaintStatus, ReportScope, StatusBreakdown};

/// Derives report metrics from one immutable batch of complaints.
pub struct ComplaintStatisticsGenerator<'a, R> {
  records: &'a [R],
  config: Config,
}

impl<'a, R: ComplaintRecord> ComplaintStatisticsGenerator<'a, R> {
  pub fn new(records: &'a [R], config: Config) -> Self {
    Self { records, config }
  }

  pub fn with_defaults(records: &'a [R]) -> Self {
    Self::new(records, Config::default())
  }

  /// Percentage per tracked status over all records.
  ///
  /// Unknown labels still count toward `total` but land in no bucket, so the
  /// percentages may sum to less than 100.
  pub fn compute_status_breakdown(&self) -> StatusBreakdown {
    breakdown(self.records.iter())
  }

  /// Median resolution days over in-progress/resolved complaints that have a
  /// resolution time. 0.0 when none qualify.
  pub fn compute_resolution_median(&self) -> f64 {
    resolution_median(self.records.iter())
  }

  /// Top `top_n` (token, count) pairs; ties keep first-seen order.
  pub fn compute_word_frequencies(&self, top_n: usize) -> Vec<(String, usize)> {
    word_frequencies(self.records.iter(), top_n, &self.config)
  }

  /// All metrics for the complaints inside `scope`.
  pub fn report(&self, scope: &ReportScope) -> ComplaintReport {
    let scoped: Vec<&R> = self.records.iter().filter(|r| scope.includes(*r)).collect();
    let report = ComplaintReport {
      scope: scope.label().to_string(),
      status: breakdown(scoped.iter().copied()),
      resolution_median_days: resolution_median(scoped.iter().copied()),
      top_words: word_frequencies(scoped.iter().copied(), self.config.default_top_n, &self.config),
    };
    log::debug!(
      "report[{}]: total={} median_days={} words={}",
      report.scope,
      report.status.total,
      report.resolution_median_days,
      report.top_words.len()
    );
    report
  }
}

fn breakdown<'r, R: ComplaintRecord + 'r>(records: impl Iterator<Item = &'r R>) -> StatusBreakdown {
  let (mut total, mut pending, mut in_progress, mut resolved) = (0usize, 0usize, 0usize, 0usize);
  for record in records {
    total += 1;
    match record.status() {
      ComplaintStatus::Pending => pending += 1,
      ComplaintStatus::InProgress => in_progress += 1,
      ComplaintStatus::Resolved => resolved += 1,
      ComplaintStatus::Other(label) => log::debug!("status breakdown: untracked status {:?}", label),
    }
  }

  if total == 0 {
    return StatusBreakdown::default();
  }

  let pct = |count: usize| count as f64 / total as f64 * 100.0;
  StatusBreakdown {
    total,
    pending_pct: Some(pct(pending)),
    in_progress_pct: Some(pct(in_progress)),
    resolved_pct: Some(pct(resolved)),
  }
}

fn resolution_median<'r, R: ComplaintRecord + 'r>(records: impl Iterator<Item = &'r R>) -> f64 {
  let mut calc = RunningMedianCalculator::new();
  for record in records.filter(|r| r.status().has_progressed()) {
    // Presence, not truthiness: a zero-day assignment counts.
    if let Some(days) = record.resolution_days_assigned() {
      calc.insert_number(days);
    }
  }
  log::debug!("resolution median over {} complaints", calc.len());
  calc.median().unwrap_or(0.0)
}

fn word_frequencies<'r, R: ComplaintRecord + 'r>(
  records: impl Iterator<Item = &'r R>,
  top_n: usize,
  config: &Config,
) -> Vec<(String, usize)> {
  // Counts in first-seen order; `index` maps a token to its slot.
  let mut counts: Vec<(String, usize)> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for record in records {
    for token in text::tokenize(record.content(), config) {
      match index.get(&token) {
        Some(&slot) => counts[slot].1 += 1,
        None => {
          index.insert(token.clone(), counts.len());
          counts.push((token, 1));
        }
      }
    }
  }

  // Stable sort keeps first-seen order among equal counts.
  counts.sort_by(|a, b| b.1.cmp(&a.1));
  counts.truncate(top_n);
  counts
}
