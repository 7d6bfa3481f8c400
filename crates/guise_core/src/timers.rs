//! Timer facility seam
//!
//! The host loop owns all scheduling; components hand it callbacks and get
//! control back immediately. Callbacks run on the same single-threaded loop
//! as event dispatch, as later independent invocations.

use std::time::Duration;

/// Schedule-once and schedule-repeating primitives on the host loop.
///
/// Implementations take `&self` and use interior mutability, so components
/// can hold a shared handle without borrowing the host mutably across a
/// dispatch.
pub trait Timers {
    /// Run `callback` once after `delay`.
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>);

    /// Run `callback` every `interval` until it returns false.
    fn schedule_repeating(&self, interval: Duration, callback: Box<dyn FnMut() -> bool>);
}

impl<T: Timers + ?Sized> Timers for std::rc::Rc<T> {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        (**self).schedule_once(delay, callback)
    }

    fn schedule_repeating(&self, interval: Duration, callback: Box<dyn FnMut() -> bool>) {
        (**self).schedule_repeating(interval, callback)
    }
}
