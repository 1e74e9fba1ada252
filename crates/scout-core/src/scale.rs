//! Bounded slider scales.

use serde::{Deserialize, Serialize};

/// A bounded slider with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct ScaleSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ScaleSpec {
    /// The whole-number rating stored in `scale`.
    pub const PRIMARY: ScaleSpec = ScaleSpec {
        min: 0.0,
        max: 10.0,
        step: 1.0,
    };

    /// The quarter-step rating stored in `secondScale`.
    pub const SECONDARY: ScaleSpec = ScaleSpec {
        min: 0.0,
        max: 3.0,
        step: 0.25,
    };

    /// Clamp into bounds and snap to the nearest step.
    ///
    /// Non-finite input snaps to `min`.
    pub fn quantize(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Whether `value` is in bounds and lands on a step.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }

    /// Slider caption: whole values without decimals, the rest with two.
    pub fn label(&self, value: f64) -> String {
        let value = self.quantize(value);
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }
}
