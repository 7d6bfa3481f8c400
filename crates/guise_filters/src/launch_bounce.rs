//! Launch-bounce animation filter
//!
//! When an application enters its starting state, find its dock icon through
//! the registered [`IconLocator`] capabilities and run a bounce sequence on
//! it. Icon construction may lag the lifecycle event, so a failed lookup is
//! retried exactly once after a short fixed delay.
//!
//! An actor already mid-bounce is left alone: a second trigger is a no-op,
//! neither queued nor restarted. Deactivation invalidates any pending retry
//! via a generation counter and returns every animated actor to rest.

use guise_animation::{BounceId, BounceScheduler, BounceSequence, BounceSpec};
use guise_core::actors::{ActorId, IconLocator, SharedActor};
use guise_core::apps::{AppId, AppLifecycle, AppState, ObserverId};
use guise_core::timers::Timers;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Delay before the single icon-lookup retry.
pub const RETRY_DELAY: Duration = Duration::from_millis(120);

#[derive(Debug, PartialEq, Eq)]
enum Lookup {
    Started,
    AlreadyAnimating,
    NoActor,
}

struct Inner {
    spec: BounceSpec,
    locators: Vec<Box<dyn IconLocator>>,
    animating: FxHashSet<ActorId>,
    scheduler: BounceScheduler,
    running: FxHashMap<BounceId, (ActorId, SharedActor)>,
    /// Bumped on every activation change; stale scheduled callbacks compare
    /// against it and bail out.
    generation: u64,
    active: bool,
}

impl Inner {
    fn try_bounce(&mut self, app: &AppId) -> Lookup {
        let Some(actor) = self
            .locators
            .iter()
            .find_map(|locator| locator.locate_icon(app))
        else {
            return Lookup::NoActor;
        };

        let actor_id = actor.borrow().id();
        if !self.animating.insert(actor_id) {
            tracing::trace!(%app, "icon already bouncing, ignoring trigger");
            return Lookup::AlreadyAnimating;
        }

        let id = self.scheduler.add(BounceSequence::new(self.spec));
        self.running.insert(id, (actor_id, actor));
        tracing::debug!(%app, ?actor_id, "bounce started");
        Lookup::Started
    }

    fn release_all(&mut self) {
        for (_, (actor_id, actor)) in self.running.drain() {
            actor.borrow_mut().set_scale(1.0);
            self.animating.remove(&actor_id);
        }
        self.scheduler.clear();
        self.animating.clear();
    }
}

/// Bounces dock icons for starting applications.
pub struct LaunchBounceFilter {
    inner: Rc<RefCell<Inner>>,
    timers: Rc<dyn Timers>,
}

impl LaunchBounceFilter {
    pub fn new(spec: BounceSpec, timers: Rc<dyn Timers>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                spec,
                locators: Vec::new(),
                animating: FxHashSet::default(),
                scheduler: BounceScheduler::new(),
                running: FxHashMap::default(),
                generation: 0,
                active: false,
            })),
            timers,
        }
    }

    /// Register a dock capability. Locators are consulted in registration
    /// order; the first that resolves the application wins, so register the
    /// preferred dock integration before any fallback.
    pub fn register_locator<L: IconLocator + 'static>(&self, locator: L) {
        self.inner.borrow_mut().locators.push(Box::new(locator));
    }

    /// Subscribe to the app lifecycle stream with fresh animation state.
    pub fn activate(&self, apps: &mut AppLifecycle) -> ObserverId {
        {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.active = true;
            inner.release_all();
        }

        let inner = Rc::clone(&self.inner);
        let timers = Rc::clone(&self.timers);
        apps.add_observer(move |event| {
            if event.state != AppState::Starting {
                return;
            }
            Self::on_starting(&inner, &timers, &event.app);
        })
    }

    /// Unsubscribe; pending retries become no-ops and every animated icon
    /// returns to rest.
    pub fn deactivate(&self, apps: &mut AppLifecycle, id: ObserverId) {
        apps.remove_observer(id);
        let mut inner = self.inner.borrow_mut();
        inner.active = false;
        inner.generation += 1;
        inner.release_all();
    }

    /// Advance all running bounces by `dt_ms` of host-loop time and apply
    /// the resulting scales. Called from the host's frame tick.
    pub fn tick(&self, dt_ms: f32) {
        let mut inner = self.inner.borrow_mut();
        let finished = inner.scheduler.tick(dt_ms);

        for id in &finished {
            if let Some((actor_id, actor)) = inner.running.remove(id) {
                actor.borrow_mut().set_scale(1.0);
                inner.animating.remove(&actor_id);
            }
        }

        let scales: Vec<(SharedActor, f32)> = inner
            .running
            .iter()
            .filter_map(|(id, (_, actor))| {
                inner.scheduler.scale(*id).map(|s| (Rc::clone(actor), s))
            })
            .collect();
        drop(inner);

        for (actor, scale) in scales {
            actor.borrow_mut().set_scale(scale);
        }
    }

    /// Number of icons currently mid-bounce.
    pub fn active_bounces(&self) -> usize {
        self.inner.borrow().running.len()
    }

    fn on_starting(inner: &Rc<RefCell<Inner>>, timers: &Rc<dyn Timers>, app: &AppId) {
        let (lookup, generation) = {
            let mut inner_mut = inner.borrow_mut();
            let generation = inner_mut.generation;
            (inner_mut.try_bounce(app), generation)
        };

        if lookup != Lookup::NoActor {
            return;
        }

        // The dock may not have built the icon yet; look again shortly.
        tracing::debug!(%app, "no icon actor yet, scheduling one retry");
        let inner = Rc::clone(inner);
        let app = app.clone();
        timers.schedule_once(
            RETRY_DELAY,
            Box::new(move || {
                let mut inner_mut = inner.borrow_mut();
                if !inner_mut.active || inner_mut.generation != generation {
                    // Deactivated (or recycled) since the retry was queued.
                    return;
                }
                if inner_mut.try_bounce(&app) == Lookup::NoActor {
                    tracing::debug!(%app, "icon actor never appeared, giving up");
                }
            }),
        );
    }
}
