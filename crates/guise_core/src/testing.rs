//! Deterministic test doubles for the host seams
//!
//! Used by unit and integration tests across the workspace; nothing here is
//! intended for production wiring.

use crate::actors::{ActorId, IconActor, IconLocator, SharedActor};
use crate::apps::AppId;
use crate::clock::Clock;
use crate::timers::Timers;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Manually-advanced clock.
pub struct ManualClock {
    ms: Cell<u64>,
    hour: Cell<u8>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            ms: Cell::new(0),
            hour: Cell::new(12),
        }
    }

    pub fn set_hour(&self, hour: u8) {
        self.hour.set(hour);
    }

    pub fn advance_ms(&self, delta: u64) {
        self.ms.set(self.ms.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.ms.get()
    }

    fn local_hour(&self) -> u8 {
        self.hour.get()
    }
}

enum Pending {
    Once(Box<dyn FnOnce()>),
    Repeating {
        interval_ms: u64,
        callback: Box<dyn FnMut() -> bool>,
    },
}

/// Manually-advanced timer queue. Callbacks fire, in due order, when
/// [`ManualTimers::advance`] crosses their deadline — mirroring a host loop
/// that only runs timers between dispatches.
pub struct ManualTimers {
    now_ms: Cell<u64>,
    queue: RefCell<Vec<(u64, Pending)>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
            queue: RefCell::new(Vec::new()),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Advance time, firing every callback whose deadline is crossed.
    /// Callbacks may schedule further timers while running.
    pub fn advance(&self, delta: Duration) {
        let target = self.now_ms.get() + delta.as_millis() as u64;
        loop {
            // Pop the earliest due entry without holding the borrow across
            // the callback, which may re-enter `schedule_once`.
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due_idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= target)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(idx, _)| idx);
                due_idx.map(|idx| queue.remove(idx))
            };

            let Some((due, pending)) = next else { break };
            self.now_ms.set(due);
            match pending {
                Pending::Once(callback) => callback(),
                Pending::Repeating {
                    interval_ms,
                    mut callback,
                } => {
                    if callback() {
                        self.queue.borrow_mut().push((
                            due + interval_ms,
                            Pending::Repeating {
                                interval_ms,
                                callback,
                            },
                        ));
                    }
                }
            }
        }
        self.now_ms.set(target);
    }
}

impl Default for ManualTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl Timers for ManualTimers {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let due = self.now_ms.get() + delay.as_millis() as u64;
        self.queue.borrow_mut().push((due, Pending::Once(callback)));
    }

    fn schedule_repeating(&self, interval: Duration, callback: Box<dyn FnMut() -> bool>) {
        let interval_ms = interval.as_millis() as u64;
        let due = self.now_ms.get() + interval_ms;
        self.queue.borrow_mut().push((
            due,
            Pending::Repeating {
                interval_ms,
                callback,
            },
        ));
    }
}

/// Recording actor: remembers every scale it was given.
pub struct RecordingActor {
    id: ActorId,
    pub scales: Vec<f32>,
}

impl RecordingActor {
    pub fn new(id: ActorId) -> Self {
        Self { id, scales: Vec::new() }
    }

    pub fn shared(id: ActorId) -> Rc<RefCell<RecordingActor>> {
        Rc::new(RefCell::new(Self::new(id)))
    }

    /// Last scale applied, or 1.0 if never scaled.
    pub fn current_scale(&self) -> f32 {
        self.scales.last().copied().unwrap_or(1.0)
    }
}

impl IconActor for RecordingActor {
    fn id(&self) -> ActorId {
        self.id
    }

    fn set_scale(&mut self, scale: f32) {
        self.scales.push(scale);
    }
}

/// Locator backed by a plain map, standing in for a dock integration.
pub struct MapLocator {
    icons: RefCell<HashMap<AppId, SharedActor>>,
}

impl MapLocator {
    pub fn new() -> Self {
        Self {
            icons: RefCell::new(HashMap::new()),
        }
    }

    pub fn insert(&self, app: AppId, actor: SharedActor) {
        self.icons.borrow_mut().insert(app, actor);
    }

    pub fn remove(&self, app: &AppId) {
        self.icons.borrow_mut().remove(app);
    }
}

impl Default for MapLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IconLocator for MapLocator {
    fn locate_icon(&self, app: &AppId) -> Option<SharedActor> {
        self.icons.borrow().get(app).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_timers_fire_in_due_order() {
        let timers = Rc::new(ManualTimers::new());
        let fired = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("late", 50u64), ("early", 10), ("mid", 30)] {
            let fired = fired.clone();
            timers.schedule_once(
                Duration::from_millis(delay),
                Box::new(move || fired.borrow_mut().push(label)),
            );
        }

        timers.advance(Duration::from_millis(100));
        assert_eq!(*fired.borrow(), vec!["early", "mid", "late"]);
    }

    #[test]
    fn repeating_timer_stops_when_callback_returns_false() {
        let timers = ManualTimers::new();
        let count = Rc::new(Cell::new(0u32));
        {
            let count = count.clone();
            timers.schedule_repeating(
                Duration::from_millis(10),
                Box::new(move || {
                    count.set(count.get() + 1);
                    count.get() < 3
                }),
            );
        }

        timers.advance(Duration::from_millis(100));
        assert_eq!(count.get(), 3);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn callback_may_schedule_another_timer() {
        let timers = Rc::new(ManualTimers::new());
        let fired = Rc::new(Cell::new(false));
        {
            let inner_timers = timers.clone();
            let fired = fired.clone();
            timers.schedule_once(
                Duration::from_millis(10),
                Box::new(move || {
                    let fired = fired.clone();
                    inner_timers.schedule_once(
                        Duration::from_millis(10),
                        Box::new(move || fired.set(true)),
                    );
                }),
            );
        }

        timers.advance(Duration::from_millis(15));
        assert!(!fired.get());
        timers.advance(Duration::from_millis(10));
        assert!(fired.get());
    }
}
