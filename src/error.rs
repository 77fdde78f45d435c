use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerError {
  #[error("You need to start the profiler first")]
  NotStarted,
  #[error("No intermediate timer started. Call inter_start() first")]
  NoIntermediate,
  #[error("end time is undefined")]
  EndUndefined,
}
