//! Guise Theme
//!
//! Day/night appearance policy and the scheduler that applies it:
//!
//! - **Phase**: pure "is it day or night" from the local hour and a
//!   configured boundary pair, wraparound included
//! - **Profile**: the light/dark theme names and wallpaper paths to apply
//! - **Scheduler**: fire-and-forget configuration writes per invocation,
//!   idempotent given unchanged time
//!
//! The scheduler never returns an error to its caller; individual write
//! failures are logged and the remaining writes still happen.

pub mod phase;
pub mod profile;
pub mod scheduler;

pub use phase::{AppearancePhase, BoundaryError, DayNightBoundary};
pub use profile::AppearanceProfile;
pub use scheduler::AppearanceScheduler;
