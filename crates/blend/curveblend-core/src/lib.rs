//! Curveblend Core (engine-agnostic)
//!
//! Stitches two keyframe curves into one continuous curve with a smooth
//! transition region. The crate owns the keyframe data model and the blending
//! algorithm; evaluating a curve at an arbitrary time is supplied by the host
//! through [`CurveEvaluator`].

pub mod blend;
pub mod config;
pub mod curve;
pub mod error;
pub mod interp;
pub mod keyframe;
pub mod sampling;

// Re-exports for consumers (adapters)
pub use blend::{
    blend_curves, blend_curves_with_config, blend_window, estimate_tangents, estimate_weights,
    BlendWindow, TangentPair, WeightPair,
};
pub use config::{BlendConfig, TimeShift};
pub use curve::{Curve, CurveEvaluator};
pub use error::{BlendError, CurveError};
pub use keyframe::{Keyframe, WeightedMode};
pub use sampling::{sample_curve, sample_range, CurveSample, SamplingConfig};
