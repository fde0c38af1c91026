//! Reference evaluator used by tests and benches.
//!
//! Plain cubic Hermite between neighbouring keys using `out_tangent` of the left
//! key and `in_tangent` of the right key. Weights are ignored. Outside the keyed
//! range the first/last value is held.

use curveblend_core::{Curve, CurveEvaluator};

#[derive(Clone, Copy, Debug, Default)]
pub struct HermiteEvaluator;

impl CurveEvaluator for HermiteEvaluator {
    fn evaluate(&self, curve: &Curve, time: f32) -> f32 {
        let (first, last) = (curve.first(), curve.last());
        if time.is_nan() || time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        let keys = curve.keys();
        let i = keys.partition_point(|k| k.time <= time);
        let (k0, k1) = (&keys[i - 1], &keys[i]);

        let dt = k1.time - k0.time;
        let t = (time - k0.time) / dt;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
    }
}
