//! Blend configuration.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::BlendError;

pub const MIN_BLEND_PERCENTAGE: f32 = 0.01;
pub const MAX_BLEND_PERCENTAGE: f32 = 0.25;
/// Finite-difference step used when estimating boundary tangents.
pub const TANGENT_STEP: f32 = 0.01;
/// Offset applied to the second curve's times; assumes unit-domain curves.
pub const CURVE2_TIME_OFFSET: f32 = 1.0;

/// How the second curve is moved along the time axis so it follows the first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimeShift {
    /// Constant offset, independent of the input domains.
    Fixed { offset: f32 },
    /// Offset derived from the inputs: `curve1.end - curve2.start + margin`.
    AfterFirst { margin: f32 },
}

impl Default for TimeShift {
    fn default() -> Self {
        TimeShift::Fixed {
            offset: CURVE2_TIME_OFFSET,
        }
    }
}

impl TimeShift {
    pub fn offset(&self, curve1: &Curve, curve2: &Curve) -> f32 {
        match *self {
            TimeShift::Fixed { offset } => offset,
            TimeShift::AfterFirst { margin } => curve1.end_time() - curve2.start_time() + margin,
        }
    }
}

/// Tunables for [`blend_curves_with_config`](crate::blend::blend_curves_with_config).
/// The default reproduces the reference constants exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// Lower bound the blend percentage is clamped to.
    pub min_blend_percentage: f32,
    /// Upper bound the blend percentage is clamped to.
    pub max_blend_percentage: f32,
    pub tangent_step: f32,
    pub time_shift: TimeShift,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            min_blend_percentage: MIN_BLEND_PERCENTAGE,
            max_blend_percentage: MAX_BLEND_PERCENTAGE,
            tangent_step: TANGENT_STEP,
            time_shift: TimeShift::default(),
        }
    }
}

impl BlendConfig {
    pub fn validate(&self) -> Result<(), BlendError> {
        let (lo, hi) = (self.min_blend_percentage, self.max_blend_percentage);
        if !lo.is_finite() || !hi.is_finite() {
            return Err(invalid("blend percentage bounds must be finite"));
        }
        if lo <= 0.0 || lo > hi {
            return Err(invalid(format!(
                "blend percentage bounds must satisfy 0 < min <= max, got [{lo}, {hi}]"
            )));
        }
        if !self.tangent_step.is_finite() || self.tangent_step <= 0.0 {
            return Err(invalid(format!(
                "tangent step must be positive, got {}",
                self.tangent_step
            )));
        }
        let shift = match self.time_shift {
            TimeShift::Fixed { offset } => offset,
            TimeShift::AfterFirst { margin } => margin,
        };
        if !shift.is_finite() {
            return Err(invalid("time shift must be finite"));
        }
        Ok(())
    }

    /// Clamp a requested blend percentage into the configured range.
    /// Expects a config that passed [`validate`](Self::validate). NaN has no
    /// nearest bound and is passed through for the caller to reject.
    pub fn clamp_percentage(&self, blend_percentage: f32) -> f32 {
        blend_percentage.clamp(self.min_blend_percentage, self.max_blend_percentage)
    }
}

fn invalid(reason: impl Into<String>) -> BlendError {
    BlendError::InvalidConfig {
        reason: reason.into(),
    }
}
