//! Day/night phase policy
//!
//! The boundary pair need not be ordered: `(19, 7)` means the night period
//! wraps past midnight. The membership test below handles both orientations
//! and is the normative definition of "day".

use thiserror::Error;

/// Out-of-range boundary hour, rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("day start hour {0} out of range 0-23")]
    DayStart(u8),
    #[error("night start hour {0} out of range 0-23")]
    NightStart(u8),
}

/// Derived appearance phase. Never persisted; recomputed per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppearancePhase {
    Day,
    Night,
}

impl AppearancePhase {
    /// Value for the desktop's color-scheme preference key.
    pub fn color_scheme_preference(&self) -> &'static str {
        match self {
            AppearancePhase::Day => "prefer-light",
            AppearancePhase::Night => "prefer-dark",
        }
    }
}

/// The configured day/night boundary pair, hours 0-23.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayNightBoundary {
    day_start_hour: u8,
    night_start_hour: u8,
}

impl DayNightBoundary {
    pub fn new(day_start_hour: u8, night_start_hour: u8) -> Result<Self, BoundaryError> {
        if day_start_hour > 23 {
            return Err(BoundaryError::DayStart(day_start_hour));
        }
        if night_start_hour > 23 {
            return Err(BoundaryError::NightStart(night_start_hour));
        }
        Ok(Self {
            day_start_hour,
            night_start_hour,
        })
    }

    pub fn day_start_hour(&self) -> u8 {
        self.day_start_hour
    }

    pub fn night_start_hour(&self) -> u8 {
        self.night_start_hour
    }

    /// Phase for a given local hour.
    ///
    /// When the night boundary is numerically below the day boundary the
    /// night period wraps past midnight, so day is everything outside
    /// `[night_start, day_start)`.
    pub fn phase_at(&self, hour: u8) -> AppearancePhase {
        let is_day = if self.night_start_hour > self.day_start_hour {
            self.day_start_hour <= hour && hour < self.night_start_hour
        } else {
            !(self.night_start_hour <= hour && hour < self.day_start_hour)
        };
        if is_day {
            AppearancePhase::Day
        } else {
            AppearancePhase::Night
        }
    }
}
