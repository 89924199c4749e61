//! Binary entrypoint: read complaint JSON lines from stdin, write one report
//! JSON line to stdout.
//!
//! Settings (environment):
//! - REPORT_DEPARTMENT: restrict the report to one department
//! - REPORT_TOP_N: size of the word ranking (default 15)
//! - REPORT_MIN_TOKEN_LEN: shortest word counted (default 3)

use complaint_stats::cli::{self, Settings};
use std::io::{self, Write};

fn main() {
  env_logger::init();

  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "complaint-stats error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let settings = Settings::from_env()?;
  let stdin = io::stdin();
  let stdout = io::stdout();
  cli::run(stdin.lock(), io::BufWriter::new(stdout.lock()), &settings)?;
  Ok(())
}
