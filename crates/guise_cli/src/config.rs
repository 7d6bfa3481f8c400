//! Guise configuration file handling

use anyhow::{Context, Result};
use guise_theme::{AppearanceProfile, BoundaryError, DayNightBoundary};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level Guise configuration (guise.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GuiseConfig {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Day/night boundary and the light/dark pair to flip between
#[derive(Debug, Deserialize, Serialize)]
pub struct AppearanceConfig {
    /// Hour (0-23) at which the day period starts
    #[serde(default = "default_day_start")]
    pub day_start_hour: u8,
    /// Hour (0-23) at which the night period starts
    #[serde(default = "default_night_start")]
    pub night_start_hour: u8,
    #[serde(default = "default_light_theme")]
    pub light_theme: String,
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,
    #[serde(default)]
    pub day_wallpaper: Option<PathBuf>,
    #[serde(default)]
    pub night_wallpaper: Option<PathBuf>,
}

fn default_day_start() -> u8 {
    7
}

fn default_night_start() -> u8 {
    19
}

fn default_light_theme() -> String {
    "Adwaita".to_string()
}

fn default_dark_theme() -> String {
    "Adwaita-dark".to_string()
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            day_start_hour: default_day_start(),
            night_start_hour: default_night_start(),
            light_theme: default_light_theme(),
            dark_theme: default_dark_theme(),
            day_wallpaper: None,
            night_wallpaper: None,
        }
    }
}

/// Watch-mode cadence
#[derive(Debug, Deserialize, Serialize)]
pub struct WatchConfig {
    /// Seconds between re-applications
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

fn default_interval() -> u64 {
    1800
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
        }
    }
}

impl GuiseConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load from a TOML file, or fall back to defaults when it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validated boundary pair.
    pub fn boundary(&self) -> Result<DayNightBoundary, BoundaryError> {
        DayNightBoundary::new(
            self.appearance.day_start_hour,
            self.appearance.night_start_hour,
        )
    }

    pub fn profile(&self) -> AppearanceProfile {
        AppearanceProfile {
            light_theme: self.appearance.light_theme.clone(),
            dark_theme: self.appearance.dark_theme.clone(),
            day_wallpaper: self.appearance.day_wallpaper.clone(),
            night_wallpaper: self.appearance.night_wallpaper.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: GuiseConfig = toml::from_str("").unwrap();
        assert_eq!(config.appearance.day_start_hour, 7);
        assert_eq!(config.appearance.night_start_hour, 19);
        assert_eq!(config.appearance.light_theme, "Adwaita");
        assert_eq!(config.watch.interval_secs, 1800);
        assert!(config.boundary().is_ok());
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config: GuiseConfig = toml::from_str(
            r#"
            [appearance]
            night_start_hour = 22
            dark_theme = "Qogir-dark"
            night_wallpaper = "/backgrounds/night.png"
            "#,
        )
        .unwrap();
        assert_eq!(config.appearance.day_start_hour, 7);
        assert_eq!(config.appearance.night_start_hour, 22);
        assert_eq!(config.appearance.dark_theme, "Qogir-dark");
        assert_eq!(
            config.appearance.night_wallpaper,
            Some(PathBuf::from("/backgrounds/night.png"))
        );
    }

    #[test]
    fn out_of_range_hour_is_rejected_by_boundary() {
        let config: GuiseConfig = toml::from_str(
            r#"
            [appearance]
            night_start_hour = 25
            "#,
        )
        .unwrap();
        assert!(config.boundary().is_err());
    }

    #[test]
    fn load_or_default_reads_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guise.toml");
        std::fs::write(&path, "[watch]\ninterval_secs = 60\n").unwrap();

        let config = GuiseConfig::load_or_default(&path).unwrap();
        assert_eq!(config.watch.interval_secs, 60);

        let missing = GuiseConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(missing.watch.interval_secs, 1800);
    }
}
