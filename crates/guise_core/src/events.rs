//! Shell event dispatch
//!
//! A single global subscription point delivering a tagged union of input
//! events to registered listeners in registration order. A listener that
//! returns [`Propagation::Stop`] prevents later listeners (and the host's
//! default handler) from seeing the event.

use smallvec::SmallVec;

/// Input event payload, tagged by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum EventKind {
    PointerDown { x: f32, y: f32, button: u8 },
    PointerUp { x: f32, y: f32, button: u8 },
    PointerMove { x: f32, y: f32 },
    KeyDown { key: u32 },
    KeyUp { key: u32 },
    Scroll { delta_x: f32, delta_y: f32 },
}

/// An event as delivered by the host shell.
///
/// `timestamp_ms` is taken from the host's monotonic clock at the moment the
/// event was queued; filters use it for time gating so dispatch stays
/// deterministic under test.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub timestamp_ms: u64,
}

impl Event {
    pub fn new(kind: EventKind, timestamp_ms: u64) -> Self {
        Self { kind, timestamp_ms }
    }

    /// Convenience constructor for a scroll event.
    pub fn scroll(timestamp_ms: u64, delta_x: f32, delta_y: f32) -> Self {
        Self::new(EventKind::Scroll { delta_x, delta_y }, timestamp_ms)
    }

    pub fn is_scroll(&self) -> bool {
        matches!(self.kind, EventKind::Scroll { .. })
    }
}

/// A listener's verdict on an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Propagation {
    /// Let later listeners and the default handler see the event.
    #[default]
    Propagate,
    /// Suppress the event for everything registered after this listener.
    Stop,
}

/// Handle for a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Event) -> Propagation>;

/// Dispatches shell events to registered listeners in registration order.
pub struct ShellEvents {
    listeners: SmallVec<[(ListenerId, Listener); 4]>,
    next_id: u64,
}

impl ShellEvents {
    pub fn new() -> Self {
        Self {
            listeners: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Register a listener; it will see events after all listeners
    /// registered before it.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Event) -> Propagation + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns false if the id was unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver an event. Returns [`Propagation::Stop`] if any listener
    /// suppressed it, in which case the host's default handling must not run.
    pub fn dispatch(&mut self, event: &Event) -> Propagation {
        for (_, listener) in self.listeners.iter_mut() {
            if listener(event) == Propagation::Stop {
                tracing::trace!(kind = ?event.kind, "event suppressed by listener");
                return Propagation::Stop;
            }
        }
        Propagation::Propagate
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ShellEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_registration_order() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut events = ShellEvents::new();
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            events.add_listener(move |_| {
                order.borrow_mut().push(tag);
                Propagation::Propagate
            });
        }

        events.dispatch(&Event::scroll(0, 0.0, 1.0));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn stop_blocks_later_listeners() {
        let reached = Rc::new(Cell::new(false));
        let mut events = ShellEvents::new();
        events.add_listener(|_| Propagation::Stop);
        {
            let reached = reached.clone();
            events.add_listener(move |_| {
                reached.set(true);
                Propagation::Propagate
            });
        }

        let verdict = events.dispatch(&Event::scroll(0, 0.0, 1.0));
        assert_eq!(verdict, Propagation::Stop);
        assert!(!reached.get());
    }

    #[test]
    fn removed_listener_no_longer_sees_events() {
        let hits = Rc::new(Cell::new(0u32));
        let mut events = ShellEvents::new();
        let id = {
            let hits = hits.clone();
            events.add_listener(move |_| {
                hits.set(hits.get() + 1);
                Propagation::Propagate
            })
        };

        events.dispatch(&Event::scroll(0, 0.0, 1.0));
        assert!(events.remove_listener(id));
        events.dispatch(&Event::scroll(1, 0.0, 1.0));
        assert_eq!(hits.get(), 1);
    }
}
