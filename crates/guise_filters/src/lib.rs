//! Guise Filters
//!
//! The two event-facing components that live inside the host shell:
//!
//! - [`ScrollThrottle`]: keeps at most 1-in-N scroll events, never two kept
//!   events closer together than a minimum interval
//! - [`LaunchBounceFilter`]: bounces an app's dock icon when the app enters
//!   its starting state
//!
//! Both hold per-activation state only: deactivating a filter resets it, and
//! continuations scheduled before deactivation become no-ops.

pub mod launch_bounce;
pub mod scroll;

pub use launch_bounce::{LaunchBounceFilter, RETRY_DELAY};
pub use scroll::{FilterConfigError, ScrollThrottle};
