//! Curve blending: splice the tail of one curve onto the head of another through
//! two synthesized bridge keyframes.
//!
//! Output layout (times ascending, first key at a given time wins):
//! - curve1 keys with `time < window.start_time`, copied verbatim
//! - bridge-start at `window.start_time`, sampled from curve1, weighted on its in side
//! - bridge-end at `window.time_shift + window.end_time`, sampled from curve2 in its own
//!   time axis, weighted on its out side
//! - curve2 keys with `time > window.end_time`, moved by `window.time_shift`
//!
//! Bridge tangents come from finite differences of the evaluator and bridge weights
//! from the neighbouring keyframes, since the bridge times generally fall between
//! existing keys.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::BlendConfig;
use crate::curve::{Curve, CurveEvaluator};
use crate::error::BlendError;
use crate::interp::{inverse_lerp, lerp_clamped};
use crate::keyframe::{Keyframe, WeightedMode};

/// Incoming/outgoing slope estimated at an arbitrary time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TangentPair {
    pub in_tangent: f32,
    pub out_tangent: f32,
}

/// Incoming/outgoing tangent weight estimated at an arbitrary time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    pub in_weight: f32,
    pub out_weight: f32,
}

impl WeightPair {
    /// Returned when the time has no keyframe on one of its sides.
    pub const NEUTRAL: WeightPair = WeightPair {
        in_weight: 1.0,
        out_weight: 1.0,
    };
}

impl Default for WeightPair {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// The transition region chosen for a pair of curves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlendWindow {
    /// Blend percentage after clamping.
    pub blend_percentage: f32,
    /// Time on curve1's axis where the bridge begins.
    pub start_time: f32,
    /// Time on curve2's original axis where the bridge ends.
    pub end_time: f32,
    /// Offset added to curve2 times in the output.
    pub time_shift: f32,
}

/// Compute the transition window for `curve1` -> `curve2`.
pub fn blend_window(
    curve1: &Curve,
    curve2: &Curve,
    blend_percentage: f32,
    config: &BlendConfig,
) -> Result<BlendWindow, BlendError> {
    config.validate()?;
    if blend_percentage.is_nan() {
        return Err(BlendError::NonFiniteBlendPercentage(blend_percentage));
    }
    let clamped = config.clamp_percentage(blend_percentage);
    if clamped != blend_percentage {
        trace!("blend percentage {blend_percentage} clamped to {clamped}");
    }

    let (curve1_start, curve1_end) = (curve1.start_time(), curve1.end_time());
    let (curve2_start, curve2_end) = (curve2.start_time(), curve2.end_time());

    Ok(BlendWindow {
        blend_percentage: clamped,
        start_time: curve1_end - (curve1_end - curve1_start) * clamped,
        end_time: curve2_start + (curve2_end - curve2_start) * clamped,
        time_shift: config.time_shift.offset(curve1, curve2),
    })
}

/// Blend `curve1` into `curve2` with the default [`BlendConfig`].
///
/// `blend_percentage` is the fraction of each curve's domain consumed by the
/// transition. Values outside `[0.01, 0.25]` are clamped, never rejected.
/// The inputs are not modified; the result is a new curve.
pub fn blend_curves<E>(
    evaluator: &E,
    curve1: &Curve,
    curve2: &Curve,
    blend_percentage: f32,
) -> Result<Curve, BlendError>
where
    E: CurveEvaluator + ?Sized,
{
    blend_curves_with_config(
        evaluator,
        curve1,
        curve2,
        blend_percentage,
        &BlendConfig::default(),
    )
}

/// Blend `curve1` into `curve2` using an explicit config.
///
/// Keys are placed in time order as they are produced (curve1 head, bridge-start,
/// bridge-end, shifted curve2 tail); a key landing on an occupied time is skipped.
/// When the time shift does not clear curve1's domain (the fixed offset of 1 with
/// curves extending past t = 1) the sections interleave rather than fail.
pub fn blend_curves_with_config<E>(
    evaluator: &E,
    curve1: &Curve,
    curve2: &Curve,
    blend_percentage: f32,
    config: &BlendConfig,
) -> Result<Curve, BlendError>
where
    E: CurveEvaluator + ?Sized,
{
    let window = blend_window(curve1, curve2, blend_percentage, config)?;
    debug!(
        "blend window: percentage={} start={} end={} shift={}",
        window.blend_percentage, window.start_time, window.end_time, window.time_shift
    );

    let mut keys = Vec::with_capacity(curve1.len() + curve2.len() + 2);

    for key in curve1.keys().iter().filter(|key| key.time < window.start_time) {
        insert_key(&mut keys, *key);
    }
    insert_key(
        &mut keys,
        bridge_key(
            evaluator,
            curve1,
            window.start_time,
            0.0,
            WeightedMode::In,
            config.tangent_step,
        ),
    );
    insert_key(
        &mut keys,
        bridge_key(
            evaluator,
            curve2,
            window.end_time,
            window.time_shift,
            WeightedMode::Out,
            config.tangent_step,
        ),
    );
    for key in curve2.keys().iter().filter(|key| key.time > window.end_time) {
        insert_key(&mut keys, key.shifted(window.time_shift));
    }

    // keys are sorted and unique by now; only a non-finite evaluator sample can fail here
    Curve::new(keys).map_err(|err| {
        warn!("rejecting blended curve: {err}");
        BlendError::from(err)
    })
}

/// Insert `key` keeping `keys` ordered by time. A key whose time is already
/// present is dropped, so the first key placed at a time wins.
fn insert_key(keys: &mut Vec<Keyframe>, key: Keyframe) {
    let index = keys.partition_point(|k| k.time < key.time);
    if keys.get(index).is_some_and(|k| k.time == key.time) {
        trace!("dropping keyframe at {}: time already taken", key.time);
        return;
    }
    keys.insert(index, key);
}

/// Synthesize a bridge keyframe sampled from `curve` at `time` (in the curve's own
/// axis) and placed at `time + offset` in the output.
fn bridge_key<E>(
    evaluator: &E,
    curve: &Curve,
    time: f32,
    offset: f32,
    weighted_mode: WeightedMode,
    tangent_step: f32,
) -> Keyframe
where
    E: CurveEvaluator + ?Sized,
{
    let tangents = estimate_tangents(evaluator, curve, time, tangent_step);
    let weights = estimate_weights(curve, time);
    Keyframe {
        time: offset + time,
        value: evaluator.evaluate(curve, time),
        in_tangent: tangents.in_tangent,
        out_tangent: tangents.out_tangent,
        in_weight: weights.in_weight,
        out_weight: weights.out_weight,
        weighted_mode,
    }
}

/// Estimate the slope on either side of `time` with one-sided finite differences.
///
/// `step` must be positive. Near the ends of the curve the result depends on the
/// evaluator's extrapolation policy.
pub fn estimate_tangents<E>(evaluator: &E, curve: &Curve, time: f32, step: f32) -> TangentPair
where
    E: CurveEvaluator + ?Sized,
{
    let prev = evaluator.evaluate(curve, time - step);
    let current = evaluator.evaluate(curve, time);
    let next = evaluator.evaluate(curve, time + step);
    TangentPair {
        in_tangent: (current - prev) / step,
        out_tangent: (next - current) / step,
    }
}

/// Estimate tangent weights at `time` from the surrounding keyframes.
///
/// Interpolates the previous key's out weight toward the next key's in weight.
/// Returns [`WeightPair::NEUTRAL`] before the first key or at/after the last one.
pub fn estimate_weights(curve: &Curve, time: f32) -> WeightPair {
    match neighbours(curve.keys(), time) {
        Some((prev, next)) => {
            let u = inverse_lerp(prev.time, next.time, time);
            // TODO: confirm whether out_weight should differ from in_weight; both
            // currently take the prev.out -> next.in interpolation.
            let weight = lerp_clamped(prev.out_weight, next.in_weight, u);
            WeightPair {
                in_weight: weight,
                out_weight: weight,
            }
        }
        None => WeightPair::NEUTRAL,
    }
}

/// Last key with `key.time <= time` and the key right after it.
fn neighbours(keys: &[Keyframe], time: f32) -> Option<(&Keyframe, &Keyframe)> {
    let split = keys.partition_point(|key| key.time <= time);
    let prev = keys.get(split.checked_sub(1)?)?;
    let next = keys.get(split)?;
    Some((prev, next))
}
