//! Guise Core
//!
//! Foundational seams between Guise components and the host desktop shell:
//!
//! - **Shell events**: tagged input-event union and a dispatcher with
//!   stop-propagation semantics
//! - **App lifecycle**: state-change notifications for starting/running apps
//! - **Dock actors**: capability interface for locating and scaling dock icons
//! - **Timers**: schedule-once / schedule-repeating on the host loop
//! - **Clock**: monotonic milliseconds and local hour-of-day
//!
//! Everything here is designed for a single-threaded, cooperative host loop:
//! handlers run synchronously to completion and continuations are scheduled
//! through the [`Timers`] seam rather than by blocking.

pub mod actors;
pub mod apps;
pub mod clock;
pub mod events;
pub mod testing;
pub mod timers;

pub use actors::{ActorId, IconActor, IconLocator, SharedActor};
pub use apps::{AppId, AppLifecycle, AppLifecycleEvent, AppState, ObserverId};
pub use clock::{Clock, SystemClock};
pub use events::{Event, EventKind, ListenerId, Propagation, ShellEvents};
pub use timers::Timers;
