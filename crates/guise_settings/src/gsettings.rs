//! GSettings backend
//!
//! Writes go through the `gsettings` command-line tool rather than a dbus
//! binding: the write path is cold (a handful of keys every few minutes) and
//! the tool is present on every GNOME install this targets.

use crate::store::{SettingsError, SettingsStore};
use std::process::Command;

/// Store backed by the host's `gsettings` binary.
pub struct GSettingsStore {
    program: String,
}

impl GSettingsStore {
    pub fn new() -> Self {
        Self {
            program: "gsettings".to_string(),
        }
    }

    /// Use a different binary, e.g. a wrapper script on sandboxed desktops.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(schema: &str, key: &str, value: &str) -> [String; 4] {
        [
            "set".to_string(),
            schema.to_string(),
            key.to_string(),
            value.to_string(),
        ]
    }
}

impl Default for GSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for GSettingsStore {
    fn set_string(&self, schema: &str, key: &str, value: &str) -> Result<(), SettingsError> {
        let output = Command::new(&self.program)
            .args(Self::args(schema, key, value))
            .output()?;

        if output.status.success() {
            tracing::trace!(schema, key, value, "gsettings write ok");
            Ok(())
        } else {
            Err(SettingsError::WriteRejected {
                schema: schema.to_string(),
                key: key.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
