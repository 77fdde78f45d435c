pub mod clock;
pub mod cmd_options;
pub mod error;
pub mod report;
pub mod timer;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::TimerError;
pub use report::InterReport;
pub use timer::Timer;
