//! Host-side transform computation feeding `TransformUniform`.
//!
//! Conventions:
//! - right-handed view space, camera looking down -Z
//! - clip-space depth in 0..1 (wgpu/Metal)
//! - column-major `glam::Mat4`, column vectors (`M * v`)

mod matrix;
mod spin;

pub use matrix::{perspective_rh, rotation, translation, uniform_scale};
pub use spin::{SpinningTransform, TransformConfig};
