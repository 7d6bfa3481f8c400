//! Appearance scheduler
//!
//! Invoked on a cadence by an external timer; each invocation reads the
//! clock, derives the phase, and writes the corresponding keys. Writes are
//! independently fire-and-forget: a failed write is logged and the rest
//! still happen, so the host never observes a failure.

use crate::phase::DayNightBoundary;
use crate::profile::AppearanceProfile;
use guise_core::clock::Clock;
use guise_core::timers::Timers;
use guise_settings::{SettingsError, SettingsStore};
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

/// GNOME interface schema: theme name and color-scheme preference.
pub const INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";
/// User-theme extension schema: shell theme name.
pub const SHELL_THEME_SCHEMA: &str = "org.gnome.shell.extensions.user-theme";
/// Background schema: picture URIs.
pub const BACKGROUND_SCHEMA: &str = "org.gnome.desktop.background";

pub const KEY_GTK_THEME: &str = "gtk-theme";
pub const KEY_SHELL_THEME: &str = "name";
pub const KEY_COLOR_SCHEME: &str = "color-scheme";
pub const KEY_PICTURE_URI: &str = "picture-uri";
pub const KEY_PICTURE_URI_DARK: &str = "picture-uri-dark";

/// Applies the appearance profile for the current phase.
pub struct AppearanceScheduler<S, C> {
    boundary: DayNightBoundary,
    profile: AppearanceProfile,
    store: S,
    clock: C,
}

impl<S: SettingsStore, C: Clock> AppearanceScheduler<S, C> {
    pub fn new(boundary: DayNightBoundary, profile: AppearanceProfile, store: S, clock: C) -> Self {
        Self {
            boundary,
            profile,
            store,
            clock,
        }
    }

    pub fn boundary(&self) -> DayNightBoundary {
        self.boundary
    }

    pub fn profile(&self) -> &AppearanceProfile {
        &self.profile
    }

    /// Apply the appearance for the current local hour.
    ///
    /// Idempotent given unchanged time; never fails from the caller's
    /// perspective.
    pub fn apply(&self) {
        let hour = self.clock.local_hour();
        let phase = self.boundary.phase_at(hour);
        tracing::debug!(hour, ?phase, "applying appearance");

        let theme = self.profile.theme_for(phase);
        self.write(INTERFACE_SCHEMA, KEY_GTK_THEME, theme);
        self.write(SHELL_THEME_SCHEMA, KEY_SHELL_THEME, theme);
        self.write(
            INTERFACE_SCHEMA,
            KEY_COLOR_SCHEME,
            phase.color_scheme_preference(),
        );

        if let Some(path) = self.profile.wallpaper_for(phase) {
            if path.exists() {
                let uri = file_uri(path);
                self.write(BACKGROUND_SCHEMA, KEY_PICTURE_URI, &uri);
                self.write(BACKGROUND_SCHEMA, KEY_PICTURE_URI_DARK, &uri);
            } else {
                tracing::debug!(
                    path = %path.display(),
                    "wallpaper missing, leaving background keys untouched"
                );
            }
        }
    }

    fn write(&self, schema: &str, key: &str, value: &str) {
        if let Err(err) = self.store.set_string(schema, key, value) {
            log_write_failure(schema, key, &err);
        }
    }
}

impl<S: SettingsStore + 'static, C: Clock + 'static> AppearanceScheduler<S, C> {
    /// Register this scheduler on a repeating cadence. The first application
    /// happens after one interval; call [`apply`](Self::apply) directly for
    /// an immediate one.
    pub fn schedule(self: Rc<Self>, timers: &dyn Timers, interval: Duration) {
        timers.schedule_repeating(
            interval,
            Box::new(move || {
                self.apply();
                true
            }),
        );
    }
}

fn log_write_failure(schema: &str, key: &str, err: &SettingsError) {
    tracing::warn!(schema, key, error = %err, "settings write failed, continuing");
}

fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}
