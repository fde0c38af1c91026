//! Interpolation helpers:
//! - lerp_f32 (unclamped)
//! - lerp_clamped (parameter clamped to [0,1])
//! - inverse_lerp (fraction of the way from a to b, clamped to [0,1])

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation with `t` clamped to [0,1].
#[inline]
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    lerp_f32(a, b, t.clamp(0.0, 1.0))
}

/// Where `value` sits between `a` and `b`, clamped to [0,1].
/// Returns 0 for a degenerate range (`a == b`).
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}
