//! Clock seam
//!
//! Components never read the system time directly; they go through [`Clock`]
//! so policy stays a pure function of injected time under test.

use chrono::Timelike;
use std::time::Instant;

/// Monotonic milliseconds plus local wall-clock hour.
pub trait Clock {
    /// Milliseconds on a monotonic clock. The origin is arbitrary but fixed
    /// for the lifetime of the clock.
    fn now_ms(&self) -> u64;

    /// Local hour of day, 0-23.
    fn local_hour(&self) -> u8;
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn local_hour(&self) -> u8 {
        (**self).local_hour()
    }
}

/// Real clock: monotonic time anchored at construction, local hour from the
/// system time zone.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn local_hour(&self) -> u8 {
        chrono::Local::now().hour() as u8
    }
}
