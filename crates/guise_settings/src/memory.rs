//! In-memory backend for tests and dry runs

use crate::store::{SettingsError, SettingsStore};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

/// Store that keeps writes in a map. Can be told to reject writes to
/// specific keys, to exercise the fire-and-forget paths.
pub struct MemoryStore {
    entries: RefCell<BTreeMap<(String, String), String>>,
    rejected: RefCell<HashSet<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            rejected: RefCell::new(HashSet::new()),
        }
    }

    /// All writes seen so far, as `((schema, key), value)` in key order.
    pub fn entries(&self) -> Vec<((String, String), String)> {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn get(&self, schema: &str, key: &str) -> Option<String> {
        self.entries
            .borrow()
            .get(&(schema.to_string(), key.to_string()))
            .cloned()
    }

    /// Make subsequent writes to `(schema, key)` fail.
    pub fn reject(&self, schema: &str, key: &str) {
        self.rejected
            .borrow_mut()
            .insert((schema.to_string(), key.to_string()));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemoryStore {
    fn set_string(&self, schema: &str, key: &str, value: &str) -> Result<(), SettingsError> {
        let slot = (schema.to_string(), key.to_string());
        if self.rejected.borrow().contains(&slot) {
            return Err(SettingsError::WriteRejected {
                schema: schema.to_string(),
                key: key.to_string(),
                detail: "rejected by test configuration".to_string(),
            });
        }
        self.entries.borrow_mut().insert(slot, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_recorded_and_readable() {
        let store = MemoryStore::new();
        store
            .set_string("org.gnome.desktop.interface", "color-scheme", "prefer-dark")
            .unwrap();
        assert_eq!(
            store.get("org.gnome.desktop.interface", "color-scheme"),
            Some("prefer-dark".to_string())
        );
    }

    #[test]
    fn rejected_keys_fail_without_recording() {
        let store = MemoryStore::new();
        store.reject("org.gnome.desktop.interface", "gtk-theme");
        assert!(store
            .set_string("org.gnome.desktop.interface", "gtk-theme", "Adwaita")
            .is_err());
        assert_eq!(store.get("org.gnome.desktop.interface", "gtk-theme"), None);
    }
}
