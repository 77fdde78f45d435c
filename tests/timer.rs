mod common;

use common::manual_timer;
use hrprofiler::TimerError;
use std::time::Duration;

#[test]
fn unstarted() {
  for r in vec!["", "t", "some reference"] {
    let (t, _) = manual_timer(r, false);
    assert_eq!(t.start_time(), None, "reference {:?}", r);
    assert_eq!(t.end_time(), None, "reference {:?}", r);
    assert_eq!(t.reference(), r);
    assert!(!t.is_running());
  }
}

#[test]
fn start_immediately() {
  let (t, clock) = manual_timer("t", true);
  assert!(t.start_time().is_some());
  assert!(t.is_running());
  clock.advance(Duration::from_millis(12));
  assert_eq!(t.lap(), Ok(Duration::from_millis(12)));
  assert_eq!(t.end_time(), None);
}

#[test]
fn lap_does_not_finalize() {
  let (t, clock) = manual_timer("t", true);
  clock.advance(Duration::from_millis(5));
  assert_eq!(t.lap(), Ok(Duration::from_millis(5)));
  clock.advance(Duration::from_millis(5));
  assert_eq!(t.lap(), Ok(Duration::from_millis(10)));
  assert_eq!(t.end_time(), None);
}

#[test]
fn lap_before_start() {
  let (t, _) = manual_timer("t", false);
  assert_eq!(t.lap(), Err(TimerError::NotStarted));
}

#[test]
fn end_before_start() {
  let (mut t, _) = manual_timer("t", false);
  assert_eq!(t.end(), Err(TimerError::NotStarted));
  assert_eq!(t.end_time(), None);
  assert!(!t.is_finished());
}

#[test]
fn end_after_start() {
  let (mut t, clock) = manual_timer("t", false);
  t.start();
  clock.advance(Duration::from_millis(50));
  assert_eq!(t.end(), Ok(Duration::from_millis(50)));
  assert_eq!(t.end_time(), Some(Duration::from_millis(50)));
  clock.advance(Duration::from_millis(50));
  assert_eq!(t.end_time(), Some(Duration::from_millis(50)));
  assert_eq!(t.lap(), Ok(Duration::from_millis(100)));
}

#[test]
fn restart_clears_end() {
  let (mut t, clock) = manual_timer("t", true);
  clock.advance(Duration::from_secs(1));
  t.end().unwrap();
  assert!(t.end_time().is_some());
  t.start();
  assert_eq!(t.end_time(), None);
  assert_eq!(t.start_time(), Some(Duration::from_secs(1)));
  assert_eq!(t.lap(), Ok(Duration::ZERO));
}

#[test]
fn intermediate() {
  let (mut t, clock) = manual_timer("t", false);
  assert_eq!(t.inter_end(), None);
  t.inter_start();
  clock.advance(Duration::from_millis(30));
  let a = t.inter_end().unwrap();
  clock.advance(Duration::from_millis(1));
  let b = t.inter_end().unwrap();
  assert_eq!(a, Duration::from_millis(30));
  assert!(b >= a);
  // primary timer untouched
  assert_eq!(t.start_time(), None);
}

#[test]
fn intermediate_restart() {
  let (mut t, clock) = manual_timer("t", true);
  t.inter_start();
  clock.advance(Duration::from_millis(40));
  t.inter_start();
  clock.advance(Duration::from_millis(10));
  assert_eq!(t.inter_end(), Some(Duration::from_millis(10)));
  assert_eq!(t.lap(), Ok(Duration::from_millis(50)));
}
