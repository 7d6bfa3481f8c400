//! Guise Settings
//!
//! The configuration-store seam: a schema-namespaced key/value store the
//! desktop owns and Guise writes into. Two backends:
//!
//! - [`GSettingsStore`]: the real thing, spawning `gsettings set`
//! - [`MemoryStore`]: in-memory backend for tests and `--dry-run`
//!
//! Writes are typed `Result`s so callers can decide whether a failure is
//! worth surfacing; the appearance scheduler deliberately logs and continues.

pub mod gsettings;
pub mod memory;
pub mod store;

pub use gsettings::GSettingsStore;
pub use memory::MemoryStore;
pub use store::{SettingsError, SettingsStore};
