//! Bounce sequences
//!
//! A bounce scales an actor up by a configured factor and back down, with
//! overshoot-then-settle easing on both halves, repeated for a configured
//! cycle count. The sequence is tick-driven: the host loop advances it and
//! reads the current scale; it never blocks and owns no actor.

use crate::easing::Easing;
use thiserror::Error;

/// Invalid bounce configuration, rejected at construction.
#[derive(Debug, Error, PartialEq)]
pub enum BounceSpecError {
    #[error("scale factor must be finite and greater than 1.0, got {0}")]
    ScaleFactor(f32),
    #[error("half period must be at least 1 ms")]
    ZeroHalfPeriod,
    #[error("cycle count must be at least 1")]
    ZeroCycles,
}

/// Bounce parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceSpec {
    scale_factor: f32,
    half_period_ms: u32,
    cycles: u32,
}

impl BounceSpec {
    pub fn new(scale_factor: f32, half_period_ms: u32, cycles: u32) -> Result<Self, BounceSpecError> {
        if !scale_factor.is_finite() || scale_factor <= 1.0 {
            return Err(BounceSpecError::ScaleFactor(scale_factor));
        }
        if half_period_ms == 0 {
            return Err(BounceSpecError::ZeroHalfPeriod);
        }
        if cycles == 0 {
            return Err(BounceSpecError::ZeroCycles);
        }
        Ok(Self {
            scale_factor,
            half_period_ms,
            cycles,
        })
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn half_period_ms(&self) -> u32 {
        self.half_period_ms
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Full sequence duration: up and down per cycle.
    pub fn total_ms(&self) -> u32 {
        self.cycles * 2 * self.half_period_ms
    }
}

impl Default for BounceSpec {
    fn default() -> Self {
        Self {
            scale_factor: 1.3,
            half_period_ms: 200,
            cycles: 2,
        }
    }
}

/// A running bounce.
#[derive(Clone, Debug)]
pub struct BounceSequence {
    spec: BounceSpec,
    easing: Easing,
    elapsed_ms: f32,
}

impl BounceSequence {
    pub fn new(spec: BounceSpec) -> Self {
        Self {
            spec,
            easing: Easing::EaseOutBack,
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms` milliseconds of host-loop time.
    pub fn tick(&mut self, dt_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.spec.total_ms() as f32);
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.spec.total_ms() as f32
    }

    /// Current uniform scale. 1.0 before the first tick and after the last.
    pub fn scale(&self) -> f32 {
        if self.is_finished() {
            return 1.0;
        }

        let half = self.spec.half_period_ms as f32;
        let half_index = (self.elapsed_ms / half) as u32;
        let t = (self.elapsed_ms - half_index as f32 * half) / half;
        let eased = self.easing.apply(t);
        let swing = self.spec.scale_factor - 1.0;

        // Even halves scale up, odd halves scale back down.
        if half_index % 2 == 0 {
            1.0 + swing * eased
        } else {
            self.spec.scale_factor - swing * eased
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> BounceSpec {
        BounceSpec::new(1.5, 100, 2).unwrap()
    }

    #[test]
    fn rejects_degenerate_configuration() {
        assert_eq!(
            BounceSpec::new(1.0, 100, 2),
            Err(BounceSpecError::ScaleFactor(1.0))
        );
        assert!(matches!(
            BounceSpec::new(f32::NAN, 100, 2),
            Err(BounceSpecError::ScaleFactor(_))
        ));
        assert_eq!(BounceSpec::new(1.5, 0, 2), Err(BounceSpecError::ZeroHalfPeriod));
        assert_eq!(BounceSpec::new(1.5, 100, 0), Err(BounceSpecError::ZeroCycles));
    }

    #[test]
    fn starts_and_ends_at_rest() {
        let mut seq = BounceSequence::new(spec());
        assert!((seq.scale() - 1.0).abs() < 1e-6);
        seq.tick(spec().total_ms() as f32);
        assert!(seq.is_finished());
        assert!((seq.scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn peaks_at_half_period_boundary() {
        let mut seq = BounceSequence::new(spec());
        seq.tick(99.9);
        let near_peak = seq.scale();
        assert!(near_peak > 1.4, "expected near factor, got {near_peak}");
    }

    #[test]
    fn second_cycle_rises_again() {
        let mut seq = BounceSequence::new(spec());
        // End of first full cycle (up + down): back near rest.
        seq.tick(200.0);
        // Quarter into the second cycle's upswing.
        seq.tick(50.0);
        assert!(seq.scale() > 1.1);
        assert!(!seq.is_finished());
    }

    #[test]
    fn ticking_past_the_end_stays_finished() {
        let mut seq = BounceSequence::new(spec());
        seq.tick(10_000.0);
        assert!(seq.is_finished());
        seq.tick(16.0);
        assert!(seq.is_finished());
        assert!((seq.scale() - 1.0).abs() < 1e-6);
    }
}
