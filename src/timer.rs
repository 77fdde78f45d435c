use crate::clock::{Clock, MonotonicClock};
use crate::error::TimerError;
use crate::report::{self, format_line, InterReport, TARGET};
use std::fmt;
use std::time::Duration;

/// Primary start/end timer with one nested intermediate timer.
///
/// Time lines go to the `log` facade at info level, usage errors at error
/// level. Every show operation also returns what it wrote.
#[derive(Clone, Debug)]
pub struct Timer<C: Clock = MonotonicClock> {
  clock: C,
  reference: String,
  start: Option<C::Instant>,
  end: Option<Duration>,
  inter: Option<C::Instant>,
}

impl Timer<MonotonicClock> {
  pub fn new<S: Into<String>>(reference: S, start: bool) -> Self {
    Self::with_clock(reference, start, MonotonicClock)
  }
  pub fn started<S: Into<String>>(reference: S) -> Self {
    Self::new(reference, true)
  }
}

impl<C: Clock> Timer<C> {
  pub fn with_clock<S: Into<String>>(reference: S, start: bool, clock: C) -> Self {
    let mut timer = Self {
      clock,
      reference: reference.into(),
      start: None,
      end: None,
      inter: None,
    };
    if start {
      timer.start();
    }
    timer
  }

  pub fn reference(&self) -> &str {
    &self.reference
  }
  pub fn start_time(&self) -> Option<C::Instant> {
    self.start
  }
  pub fn end_time(&self) -> Option<Duration> {
    self.end
  }
  pub fn is_running(&self) -> bool {
    self.start.is_some() && self.end.is_none()
  }
  pub fn is_finished(&self) -> bool {
    self.end.is_some()
  }

  /// Begins a new session, dropping any finalized duration.
  pub fn start(&mut self) {
    self.start = Some(self.clock.now());
    self.end = None;
    log::debug!(target: TARGET, "{} | start", self.reference);
  }

  pub fn end(&mut self) -> Result<Duration, TimerError> {
    let d = report::logged(self.since_start())?;
    self.end = Some(d);
    log::debug!(target: TARGET, "{} | end", self.reference);
    Ok(d)
  }

  pub fn lap(&self) -> Result<Duration, TimerError> {
    report::logged(self.since_start())
  }

  /// Overwrites any running intermediate timer.
  pub fn inter_start(&mut self) {
    self.inter = Some(self.clock.now());
    log::debug!(target: TARGET, "{} | intermediate start", self.reference);
  }

  pub fn inter_end(&self) -> Option<Duration> {
    self.inter.map(|t| self.clock.elapsed(t))
  }

  pub fn show_lap_time(&self, description: Option<&str>) -> Result<String, TimerError> {
    let description = non_empty(description).unwrap_or("Lap");
    let line = self
      .since_start()
      .map(|d| format_line(&self.reference, description, d));
    report::emit(line)
  }

  pub fn show_inter_time(&self, description: Option<&str>, show_lap: bool) -> InterReport {
    let description = non_empty(description);
    let lap = if show_lap {
      let lap_description = description.map(|s| format!("Lap {}", s));
      Some(self.show_lap_time(lap_description.as_deref()))
    } else {
      None
    };
    let inter = self
      .inter_end()
      .ok_or(TimerError::NoIntermediate)
      .map(|d| format_line(&self.reference, description.unwrap_or("Intermediate"), d));
    InterReport {
      lap,
      inter: report::emit(inter),
    }
  }

  /// Finalizes the timer first if `end` was never called.
  pub fn show_full_time(&mut self) -> Result<String, TimerError> {
    if self.end.is_none() {
      // a failed end() already reported NotStarted
      let _ = self.end();
    }
    let line = self
      .end
      .map(|d| format_line(&self.reference, "Full", d))
      .ok_or(TimerError::EndUndefined);
    report::emit(line)
  }

  fn since_start(&self) -> Result<Duration, TimerError> {
    self
      .start
      .map(|t| self.clock.elapsed(t))
      .ok_or(TimerError::NotStarted)
  }
}

// an empty description falls back to the default label
fn non_empty(description: Option<&str>) -> Option<&str> {
  description.filter(|s| !s.is_empty())
}

impl<C: Clock> fmt::Display for Timer<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.since_start() {
      Ok(d) => write!(f, "{}", format_line(&self.reference, "Lap", d)),
      Err(_) => write!(f, "{} | not started", self.reference),
    }
  }
}
