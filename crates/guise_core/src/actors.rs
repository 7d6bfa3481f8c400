//! Dock actor capability seam
//!
//! A dock integration exposes its icons to Guise through [`IconLocator`]
//! rather than Guise probing the dock's internal structure. Locators are
//! consulted in registration order; the first one that knows the application
//! wins.
//!
//! Actor handles are host-owned: holding a [`SharedActor`] implies no
//! ownership of the icon's lifecycle.

use crate::apps::AppId;
use std::cell::RefCell;
use std::rc::Rc;

/// Identity of a scene-graph actor (e.g. a dock icon).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorId(pub u64);

/// A visual element that can be scaled by an animation.
pub trait IconActor {
    fn id(&self) -> ActorId;

    /// Set the actor's uniform scale, 1.0 being its resting size.
    fn set_scale(&mut self, scale: f32);
}

/// Shared handle to a host-owned actor, confined to the dispatch thread.
pub type SharedActor = Rc<RefCell<dyn IconActor>>;

/// Capability interface a dock integration registers with the launch-bounce
/// filter: resolve an application identity to its icon actor, if the dock
/// currently shows one.
pub trait IconLocator {
    fn locate_icon(&self, app: &AppId) -> Option<SharedActor>;
}

impl<L: IconLocator + ?Sized> IconLocator for Rc<L> {
    fn locate_icon(&self, app: &AppId) -> Option<SharedActor> {
        (**self).locate_icon(app)
    }
}
