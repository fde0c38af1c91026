//! Error types for curve construction and blending.

use thiserror::Error;

/// Invariant violations detected while building a [`Curve`](crate::curve::Curve).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("curve must contain at least one keyframe")]
    Empty,
    #[error("keyframe {index} has a non-finite time or value")]
    NonFinite { index: usize },
    #[error("keyframe {index} at time {time} does not come after previous time {previous}")]
    Unsorted {
        index: usize,
        previous: f32,
        time: f32,
    },
}

/// Errors produced by [`blend_curves`](crate::blend::blend_curves).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlendError {
    /// NaN cannot be clamped into the blend range.
    #[error("blend percentage must be a number, got {0}")]
    NonFiniteBlendPercentage(f32),
    #[error("invalid blend config: {reason}")]
    InvalidConfig { reason: String },
    /// The evaluator returned a non-finite value for a bridge keyframe.
    #[error("blended keyframes do not form a valid curve: {0}")]
    Output(#[from] CurveError),
}
