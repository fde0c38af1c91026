//! Scalar interpolation helpers shared by the blender and the sampler.

pub mod functions;

pub use functions::{inverse_lerp, lerp_clamped, lerp_f32};
