//! Deferred work scheduling
//!
//! - `clock`: millisecond time sources (browser and virtual)
//! - `debounce`: the supersede-on-retrigger scheduler

pub mod clock;
pub mod debounce;

pub use clock::{Clock, ManualClock, PerformanceClock};
pub use debounce::Debouncer;
