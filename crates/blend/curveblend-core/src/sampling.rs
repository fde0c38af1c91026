//! Fixed-resolution sampling of curves for hosts that draw or export them.
//!
//! Model:
//! - A range `[start, end]` is sampled at `count` evenly spaced times, both ends inclusive.
//! - Values come from the host's [`CurveEvaluator`]; this module never interpolates keys.
//!
//! A blended curve produced with the default time shift spans roughly `[0, 2]`,
//! while its unit-domain sources span `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::curve::{Curve, CurveEvaluator};
use crate::interp::lerp_f32;

/// Resolution used by [`SamplingConfig::default`].
pub const DEFAULT_SAMPLE_COUNT: usize = 300;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub time: f32,
    pub value: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of samples, inclusive of both ends.
    pub sample_count: usize,
    /// Start of the sampled range; if None, uses the curve's first key time.
    pub start_time: Option<f32>,
    /// End of the sampled range; if None, uses the curve's last key time.
    pub end_time: Option<f32>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            start_time: None,
            end_time: None,
        }
    }
}

/// Sample `curve` over `[start, end]` at `count` evenly spaced times.
///
/// `count == 0` yields no samples and `count == 1` samples `start` only.
/// `end < start` is allowed and walks the range backwards.
pub fn sample_range<E>(
    evaluator: &E,
    curve: &Curve,
    start: f32,
    end: f32,
    count: usize,
) -> Vec<CurveSample>
where
    E: CurveEvaluator + ?Sized,
{
    let mut samples = Vec::with_capacity(count);
    let last = count.saturating_sub(1).max(1) as f32;
    for i in 0..count {
        let time = lerp_f32(start, end, i as f32 / last);
        samples.push(CurveSample {
            time,
            value: evaluator.evaluate(curve, time),
        });
    }
    samples
}

/// Sample `curve` according to `cfg`, falling back to the curve's own domain
/// for unset or non-finite bounds.
pub fn sample_curve<E>(evaluator: &E, curve: &Curve, cfg: &SamplingConfig) -> Vec<CurveSample>
where
    E: CurveEvaluator + ?Sized,
{
    let start = cfg
        .start_time
        .filter(|t| t.is_finite())
        .unwrap_or_else(|| curve.start_time());
    let end = cfg
        .end_time
        .filter(|t| t.is_finite())
        .unwrap_or_else(|| curve.end_time());
    sample_range(evaluator, curve, start, end, cfg.sample_count)
}

/// Export samples as serde_json::Value (array of `{ "time", "value" }`).
pub fn export_samples_json(samples: &[CurveSample]) -> serde_json::Value {
    serde_json::to_value(samples).unwrap_or(serde_json::Value::Null)
}
