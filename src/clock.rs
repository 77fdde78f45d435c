use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic instants for a [`crate::Timer`].
pub trait Clock {
  type Instant: Copy + Debug;
  fn now(&self) -> Self::Instant;
  /// Elapsed time from `earlier` to `later`, never negative.
  fn duration_since(&self, later: Self::Instant, earlier: Self::Instant) -> Duration;
  fn elapsed(&self, since: Self::Instant) -> Duration {
    self.duration_since(self.now(), since)
  }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
  type Instant = Instant;
  fn now(&self) -> Instant {
    Instant::now()
  }
  fn duration_since(&self, later: Instant, earlier: Instant) -> Duration {
    later.saturating_duration_since(earlier)
  }
}

/// Clock that only moves when told to. Clones share the same reading.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<Duration>>);

impl ManualClock {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn advance(&self, d: Duration) {
    self.0.set(self.0.get() + d);
  }
  pub fn set(&self, t: Duration) {
    self.0.set(t);
  }
  pub fn reading(&self) -> Duration {
    self.0.get()
  }
}

impl Clock for ManualClock {
  type Instant = Duration;
  fn now(&self) -> Duration {
    self.0.get()
  }
  fn duration_since(&self, later: Duration, earlier: Duration) -> Duration {
    later.saturating_sub(earlier)
  }
}
