//! Scroll throttling
//!
//! Tames over-sensitive scroll hardware by composing two gates: a minimum
//! interval since the last *kept* event, and 1-in-N decimation. An event
//! must pass both to propagate. Non-scroll events are never touched.

use guise_core::events::{Event, EventKind, ListenerId, Propagation, ShellEvents};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

/// Invalid throttle configuration, rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterConfigError {
    /// A zero modulus would suppress every event (or divide by zero).
    #[error("keep_every must be at least 1")]
    ZeroModulus,
}

/// Per-activation scroll throttle state.
///
/// `drop_counter` advances only on events that pass the interval gate, and
/// the interval gate is keyed to the last event actually kept, so the two
/// mechanisms compose rather than race.
#[derive(Debug)]
pub struct ScrollThrottle {
    keep_every: u32,
    min_interval_ms: u64,
    drop_counter: u32,
    last_kept_ms: Option<u64>,
}

impl ScrollThrottle {
    pub fn new(keep_every: u32, min_interval: Duration) -> Result<Self, FilterConfigError> {
        if keep_every == 0 {
            return Err(FilterConfigError::ZeroModulus);
        }
        Ok(Self {
            keep_every,
            min_interval_ms: min_interval.as_millis() as u64,
            drop_counter: 0,
            last_kept_ms: None,
        })
    }

    /// Decide one event. Scroll events are suppressed unless they pass both
    /// the interval gate and the decimation counter; everything else
    /// propagates untouched.
    pub fn handle(&mut self, event: &Event) -> Propagation {
        if !matches!(event.kind, EventKind::Scroll { .. }) {
            return Propagation::Propagate;
        }

        if let Some(last_kept) = self.last_kept_ms {
            let elapsed = event.timestamp_ms.saturating_sub(last_kept);
            if elapsed < self.min_interval_ms {
                // Too soon after the last kept event; counter unchanged.
                return Propagation::Stop;
            }
        }

        self.drop_counter = (self.drop_counter + 1) % self.keep_every;
        if self.drop_counter != 0 {
            return Propagation::Stop;
        }

        self.last_kept_ms = Some(event.timestamp_ms);
        Propagation::Propagate
    }

    /// Return to the initial state, as on deactivation.
    pub fn reset(&mut self) {
        self.drop_counter = 0;
        self.last_kept_ms = None;
    }

    /// Subscribe a shared throttle to the shell event stream.
    pub fn attach(filter: &Rc<RefCell<ScrollThrottle>>, events: &mut ShellEvents) -> ListenerId {
        let filter = Rc::clone(filter);
        events.add_listener(move |event| filter.borrow_mut().handle(event))
    }

    /// Unsubscribe and reset, as the host does when the component is
    /// disabled.
    pub fn detach(
        filter: &Rc<RefCell<ScrollThrottle>>,
        events: &mut ShellEvents,
        id: ListenerId,
    ) {
        events.remove_listener(id);
        filter.borrow_mut().reset();
    }
}
