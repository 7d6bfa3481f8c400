//! Appearance profile
//!
//! What to apply per phase: a light/dark theme-name pair and optional
//! per-phase wallpapers.

use crate::phase::AppearancePhase;
use std::path::{Path, PathBuf};

/// The light/dark pair the scheduler flips between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppearanceProfile {
    pub light_theme: String,
    pub dark_theme: String,
    pub day_wallpaper: Option<PathBuf>,
    pub night_wallpaper: Option<PathBuf>,
}

impl AppearanceProfile {
    pub fn new(light_theme: impl Into<String>, dark_theme: impl Into<String>) -> Self {
        Self {
            light_theme: light_theme.into(),
            dark_theme: dark_theme.into(),
            day_wallpaper: None,
            night_wallpaper: None,
        }
    }

    pub fn with_wallpapers(
        mut self,
        day: impl Into<PathBuf>,
        night: impl Into<PathBuf>,
    ) -> Self {
        self.day_wallpaper = Some(day.into());
        self.night_wallpaper = Some(night.into());
        self
    }

    pub fn theme_for(&self, phase: AppearancePhase) -> &str {
        match phase {
            AppearancePhase::Day => &self.light_theme,
            AppearancePhase::Night => &self.dark_theme,
        }
    }

    pub fn wallpaper_for(&self, phase: AppearancePhase) -> Option<&Path> {
        match phase {
            AppearancePhase::Day => self.day_wallpaper.as_deref(),
            AppearancePhase::Night => self.night_wallpaper.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_and_wallpaper_follow_the_phase() {
        let profile = AppearanceProfile::new("Adwaita", "Adwaita-dark")
            .with_wallpapers("/w/day.png", "/w/night.png");

        assert_eq!(profile.theme_for(AppearancePhase::Day), "Adwaita");
        assert_eq!(profile.theme_for(AppearancePhase::Night), "Adwaita-dark");
        assert_eq!(
            profile.wallpaper_for(AppearancePhase::Night),
            Some(Path::new("/w/night.png"))
        );
    }

    #[test]
    fn wallpapers_are_optional() {
        let profile = AppearanceProfile::new("Adwaita", "Adwaita-dark");
        assert_eq!(profile.wallpaper_for(AppearancePhase::Day), None);
    }
}
