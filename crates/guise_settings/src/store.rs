//! Settings store trait and error type

use std::rc::Rc;
use thiserror::Error;

/// Failure writing to the desktop's configuration store.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The backing service could not be reached at all.
    #[error("settings backend unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// The backend ran but rejected the write.
    #[error("write rejected for {schema} {key}: {detail}")]
    WriteRejected {
        schema: String,
        key: String,
        detail: String,
    },
}

/// A hierarchical, schema-namespaced key/value store owned by the desktop.
///
/// Only string-typed writes are needed here; theme names, color-scheme
/// preferences, and background URIs are all strings on the wire.
pub trait SettingsStore {
    fn set_string(&self, schema: &str, key: &str, value: &str) -> Result<(), SettingsError>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for Rc<S> {
    fn set_string(&self, schema: &str, key: &str, value: &str) -> Result<(), SettingsError> {
        (**self).set_string(schema, key, value)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn set_string(&self, schema: &str, key: &str, value: &str) -> Result<(), SettingsError> {
        (**self).set_string(schema, key, value)
    }
}
