//! Keyframe (control point) data model.

use serde::{Deserialize, Serialize};

/// Tangent weight applied when a keyframe does not specify one.
pub const DEFAULT_WEIGHT: f32 = 1.0 / 3.0;

/// Which of a keyframe's tangents are subject to weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightedMode {
    #[default]
    None,
    In,
    Out,
    Both,
}

fn default_weight() -> f32 {
    DEFAULT_WEIGHT
}

/// A single control point of a piecewise curve.
///
/// Tangents are slopes (value units per time unit) used immediately before
/// (`in_tangent`) and after (`out_tangent`) this keyframe. Weights control how
/// far each tangent pulls toward the neighbouring keyframe and only apply to
/// the sides enabled by `weighted_mode`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
    #[serde(default = "default_weight")]
    pub in_weight: f32,
    #[serde(default = "default_weight")]
    pub out_weight: f32,
    #[serde(default)]
    pub weighted_mode: WeightedMode,
}

impl Keyframe {
    /// Flat keyframe with default weights and no weighting.
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
            in_weight: DEFAULT_WEIGHT,
            out_weight: DEFAULT_WEIGHT,
            weighted_mode: WeightedMode::None,
        }
    }

    pub fn with_tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }

    pub fn with_weights(mut self, in_weight: f32, out_weight: f32, mode: WeightedMode) -> Self {
        self.in_weight = in_weight;
        self.out_weight = out_weight;
        self.weighted_mode = mode;
        self
    }

    /// Copy of this keyframe moved by `offset` along the time axis.
    /// Value, tangents, weights and weighted mode are carried over unchanged.
    #[inline]
    pub fn shifted(&self, offset: f32) -> Self {
        Self {
            time: self.time + offset,
            ..*self
        }
    }
}
