//! Streaming median over two heaps: a max-heap for the lower half and a
//! min-heap for the upper half.

use std::cmp::Ordering;

use crate::heap::{MaxHeap, MinHeap};

/// Median of every number inserted so far. Append-only; one instance per stream.
#[derive(Debug, Clone, Default)]
pub struct RunningMedianCalculator {
  lower: MaxHeap<f64>,
  upper: MinHeap<f64>,
}

impl RunningMedianCalculator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a value and rebalance so the halves differ by at most one.
  ///
  /// NaN is skipped: it has no place in either half.
  pub fn insert_number(&mut self, value: impl Into<f64>) {
    let value = value.into();
    if value.is_nan() {
      log::warn!("running median: ignoring NaN input");
      return;
    }

    match self.lower.peek_root() {
      Some(&top) if value > top => self.upper.insert(value),
      _ => self.lower.insert(value),
    }

    if self.lower.len() > self.upper.len() + 1 {
      if let Some(v) = self.lower.extract_root() {
        self.upper.insert(v);
      }
    } else if self.upper.len() > self.lower.len() + 1 {
      if let Some(v) = self.upper.extract_root() {
        self.lower.insert(v);
      }
    }
  }

  /// `None` until the first insertion; never confused with a median of zero.
  pub fn median(&self) -> Option<f64> {
    match self.lower.len().cmp(&self.upper.len()) {
      Ordering::Greater => self.lower.peek_root().copied(),
      Ordering::Less => self.upper.peek_root().copied(),
      Ordering::Equal => match (self.lower.peek_root(), self.upper.peek_root()) {
        (Some(&lo), Some(&hi)) => Some((lo + hi) / 2.0),
        _ => None,
      },
    }
  }

  pub fn len(&self) -> usize {
    self.lower.len() + self.upper.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Extend<f64> for RunningMedianCalculator {
  fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
    for v in iter {
      self.insert_number(v);
    }
  }
}
