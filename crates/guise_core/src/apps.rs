//! Application lifecycle stream
//!
//! The host shell's application registry emits a notification whenever a
//! tracked application changes state. Observers receive every notification;
//! there is no propagation control on this stream.

use smallvec::SmallVec;

/// Stable identity of an application, as known to the host registry
/// (typically the desktop-file id, e.g. `org.gnome.Calculator.desktop`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a tracked application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    /// Launch requested; windows/icons may not exist yet.
    Starting,
    Running,
    Stopped,
}

/// A single state-change notification.
#[derive(Clone, Debug, PartialEq)]
pub struct AppLifecycleEvent {
    pub app: AppId,
    pub state: AppState,
}

/// Handle for a registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&AppLifecycleEvent)>;

/// Fans application state changes out to registered observers.
pub struct AppLifecycle {
    observers: SmallVec<[(ObserverId, Observer); 4]>,
    next_id: u64,
}

impl AppLifecycle {
    pub fn new() -> Self {
        Self {
            observers: SmallVec::new(),
            next_id: 0,
        }
    }

    pub fn add_observer<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&AppLifecycleEvent) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unregister an observer. Returns false if the id was unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Notify all observers of a state change.
    pub fn notify(&mut self, app: AppId, state: AppState) {
        let event = AppLifecycleEvent { app, state };
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for AppLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
