//! Easing functions

/// Easing curve, applied to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Overshoots the target before settling back — the launch-bounce curve.
    EaseOutBack,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    ///
    /// `EaseOutBack` intentionally exceeds 1.0 mid-curve; callers animating
    /// scale want that overshoot.
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutBack => {
                // Standard back coefficients (c1 = 1.70158)
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutBack,
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_out_back_overshoots_then_settles() {
        let mid = Easing::EaseOutBack.apply(0.75);
        assert!(mid > 1.0, "expected overshoot, got {mid}");
        let late = Easing::EaseOutBack.apply(0.99);
        assert!((late - 1.0).abs() < 0.05, "expected settle, got {late}");
    }

    #[test]
    fn monotone_curves_stay_in_unit_range() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            for i in 0..=100 {
                let t = i as f32 / 100.0;
                let v = easing.apply(t);
                assert!((0.0..=1.0 + 1e-6).contains(&v), "{easing:?} at {t}: {v}");
            }
        }
    }
}
