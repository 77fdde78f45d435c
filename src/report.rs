use crate::error::TimerError;
use std::time::Duration;

pub const TARGET: &str = "hrprofiler";

pub fn split(d: Duration) -> (u64, f64) {
  (d.as_secs(), d.subsec_nanos() as f64 / 1_000_000.0)
}

pub fn format_line(reference: &str, description: &str, d: Duration) -> String {
  let (secs, millis) = split(d);
  format!("{} | {} time: {}s {}ms", reference, description, secs, millis)
}

pub(crate) fn logged<T>(r: Result<T, TimerError>) -> Result<T, TimerError> {
  if let Err(err) = &r {
    log::error!(target: TARGET, "{}", err);
  }
  r
}

pub(crate) fn emit(line: Result<String, TimerError>) -> Result<String, TimerError> {
  match &line {
    Ok(s) => log::info!(target: TARGET, "{}", s),
    Err(err) => log::error!(target: TARGET, "{}", err),
  }
  line
}

/// Lines written by `Timer::show_inter_time`.
#[derive(Clone, Debug, PartialEq)]
pub struct InterReport {
  pub lap: Option<Result<String, TimerError>>,
  pub inter: Result<String, TimerError>,
}
