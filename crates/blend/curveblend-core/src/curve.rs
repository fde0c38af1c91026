//! Validated keyframe curves and the evaluation capability they are sampled through.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::keyframe::Keyframe;

/// An ordered, non-empty sequence of keyframes with strictly increasing times.
///
/// The invariant is checked on every construction path (including serde), so
/// any `Curve` handed to the blender is already known to be well formed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new(keys: Vec<Keyframe>) -> Result<Self, CurveError> {
        validate_keys(&keys)?;
        Ok(Self { keys })
    }

    /// Keyframes in ascending time order.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn into_keys(self) -> Vec<Keyframe> {
        self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for a constructed curve.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn first(&self) -> &Keyframe {
        // non-empty by construction
        &self.keys[0]
    }

    pub fn last(&self) -> &Keyframe {
        &self.keys[self.keys.len() - 1]
    }

    pub fn start_time(&self) -> f32 {
        self.first().time
    }

    pub fn end_time(&self) -> f32 {
        self.last().time
    }

    pub fn duration(&self) -> f32 {
        self.end_time() - self.start_time()
    }
}

impl TryFrom<Vec<Keyframe>> for Curve {
    type Error = CurveError;

    fn try_from(keys: Vec<Keyframe>) -> Result<Self, Self::Error> {
        Curve::new(keys)
    }
}

impl From<Curve> for Vec<Keyframe> {
    fn from(curve: Curve) -> Self {
        curve.keys
    }
}

/// Check the curve invariants: at least one key, finite time/value, strictly ascending times.
pub fn validate_keys(keys: &[Keyframe]) -> Result<(), CurveError> {
    if keys.is_empty() {
        return Err(CurveError::Empty);
    }
    let mut previous = f32::NEG_INFINITY;
    for (index, key) in keys.iter().enumerate() {
        if !key.time.is_finite() || !key.value.is_finite() {
            return Err(CurveError::NonFinite { index });
        }
        if key.time <= previous {
            return Err(CurveError::Unsorted {
                index,
                previous,
                time: key.time,
            });
        }
        previous = key.time;
    }
    Ok(())
}

/// Samples a curve at an arbitrary time using the curve's own interpolation rules,
/// including whatever extrapolation policy applies outside its keyed range.
///
/// The blender never interprets tangents or weights itself; every value it needs
/// comes through this trait.
pub trait CurveEvaluator {
    fn evaluate(&self, curve: &Curve, time: f32) -> f32;
}

impl<F> CurveEvaluator for F
where
    F: Fn(&Curve, f32) -> f32,
{
    fn evaluate(&self, curve: &Curve, time: f32) -> f32 {
        self(curve, time)
    }
}
