use std::time::Duration;

use hrprofiler::{ManualClock, Timer};

#[allow(dead_code)]
pub fn manual_timer(reference: &str, start: bool) -> (Timer<ManualClock>, ManualClock) {
  let clock = ManualClock::new();
  (Timer::with_clock(reference, start, clock.clone()), clock)
}

#[allow(dead_code)]
pub fn assert_millis_between(d: Duration, lo: u128, hi: u128) {
  let ms = d.as_millis();
  assert!(
    lo <= ms && ms <= hi,
    "elapsed {}ms is outside [{}, {}]",
    ms,
    lo,
    hi
  );
}

#[allow(dead_code)]
pub fn millis_field(line: &str) -> f64 {
  let t = line
    .rsplit(' ')
    .next()
    .and_then(|s| s.strip_suffix("ms"))
    .unwrap();
  t.parse().unwrap()
}
