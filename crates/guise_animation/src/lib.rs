//! Guise Animation
//!
//! Tick-driven cosmetic animation for dock icons:
//!
//! - **Easing**: a small set of curves including the overshoot-then-settle
//!   `EaseOutBack` used by the launch bounce
//! - **Bounce sequences**: scale 1.0 → factor → 1.0, repeated for a
//!   configured cycle count
//! - **Scheduler**: ticks all live sequences and reports the finished ones
//!
//! Nothing here touches the scene graph; callers read the current scale each
//! tick and apply it to whatever actor they own.

pub mod bounce;
pub mod easing;
pub mod scheduler;

pub use bounce::{BounceSequence, BounceSpec, BounceSpecError};
pub use easing::Easing;
pub use scheduler::{BounceId, BounceScheduler};
