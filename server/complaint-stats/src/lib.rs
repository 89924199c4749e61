//! Complaint statistics engine: in-memory analytics over complaint snapshots.
//!
//! Provides a generic binary heap with injected min/max ordering, a two-heap
//! running median, and a generator that turns a batch of complaints into a
//! status breakdown, a resolution-time median and a word-frequency ranking.
//!
//! No DB, no network; pure computation over caller-supplied records.

pub mod cli;
pub mod config;
pub mod error;
pub mod heap;
pub mod intake;
pub mod median;
pub mod stats;
pub mod text;
pub mod types;

pub use config::Config;
pub use error::{StatsError, StatsResult};
pub use heap::{BinaryHeap, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder};
pub use median::RunningMedianCalculator;
pub use stats::ComplaintStatisticsGenerator;
pub use types::{
  ComplaintRecord, ComplaintReport, ComplaintSnapshot, ComplaintStatus, InboundComplaint,
  ReportScope, StatusBreakdown,
};
